//! FaithBot CLI and relay server entry point.
//!
//! Binary name: `faithbot`
//!
//! Parses CLI arguments, initializes tracing and configuration, then
//! dispatches to the chat client, the one-shot `ask`, or the HTTP relay.

mod cli;

use std::time::Duration;

use clap::Parser;
use clap_complete::generate;

use faithbot_api::http;
use faithbot_api::state::AppState;
use faithbot_core::widget::WidgetConfig;
use faithbot_observe::tracing_setup::{
    TracingOptions, filter_for_verbosity, init_tracing, shutdown_tracing,
};

use cli::chat::loop_runner::{ChatOptions, run_chat_loop};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "faithbot", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(&TracingOptions {
        filter: filter_for_verbosity(cli.verbose, cli.quiet).to_string(),
        json: cli.log_json,
        otel: cli.otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { port, host } => {
            let mut config = faithbot_infra::config::load_relay_config(cli.config.as_deref()).await;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let route = config.server.route.clone();
            let state = AppState::init(config)?;
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} FaithBot relay listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}{route}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, %route, "relay server started");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Chat {
            server,
            api,
            title,
            welcome,
            timeout_secs,
        } => {
            let mut widget = WidgetConfig::default();
            if let Some(api) = api {
                widget.api_url = api;
            }
            if let Some(title) = title {
                widget.title = title;
            }
            if let Some(welcome) = welcome {
                widget.welcome = welcome;
            }
            run_chat_loop(ChatOptions {
                server,
                widget,
                timeout: Duration::from_secs(timeout_secs),
            })
            .await?;
        }

        Commands::Ask { message, history } => {
            let config = faithbot_infra::config::load_relay_config(cli.config.as_deref()).await;
            let state = AppState::init(config)?;
            cli::ask::ask(&state, message, history.as_deref(), cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled before tracing init"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
