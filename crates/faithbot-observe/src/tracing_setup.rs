//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry trace export.
//!
//! # Usage
//!
//! ```no_run
//! use faithbot_observe::tracing_setup::{TracingOptions, init_tracing};
//!
//! init_tracing(&TracingOptions::default()).unwrap();
//! ```

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use std::sync::OnceLock;

/// Stores the OTel tracer provider so it can be shut down cleanly on exit.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// How the global subscriber is assembled.
#[derive(Debug, Clone)]
pub struct TracingOptions {
    /// Filter directives used when `RUST_LOG` is not set.
    pub filter: String,
    /// Emit one JSON object per event instead of human-readable lines.
    pub json: bool,
    /// Bridge spans to OpenTelemetry with a stdout exporter.
    pub otel: bool,
}

impl Default for TracingOptions {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
            otel: false,
        }
    }
}

/// Map CLI verbosity flags to filter directives.
pub fn filter_for_verbosity(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,faithbot=debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over [`TracingOptions::filter`].
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set or the
/// filter directives are invalid.
pub fn init_tracing(options: &TracingOptions) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&options.filter)?,
    };

    let json_layer = options.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
    });
    let text_layer = (!options.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_span_events(FmtSpan::CLOSE)
    });

    let otel_layer = if options.otel {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("faithbot");

        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

/// Flush pending traces and shut down the OpenTelemetry tracer provider.
///
/// No-op when OTel was not enabled.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(0, true), "error");
        assert_eq!(filter_for_verbosity(0, false), "warn");
        assert_eq!(filter_for_verbosity(1, false), "info,faithbot=debug");
        assert_eq!(filter_for_verbosity(3, true), "trace");
    }

    #[test]
    fn test_default_options() {
        let options = TracingOptions::default();
        assert_eq!(options.filter, "warn");
        assert!(!options.json);
        assert!(!options.otel);
    }

    #[test]
    fn test_shutdown_without_otel_is_noop() {
        shutdown_tracing();
    }
}
