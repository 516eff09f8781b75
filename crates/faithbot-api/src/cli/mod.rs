//! CLI command definitions for the `faithbot` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` runs the relay,
//! `chat` drives the conversation widget against a running relay, and
//! `ask` performs a single relay turn in-process.

pub mod ask;
pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Scripture-grounded chat relay and terminal client.
#[derive(Parser)]
#[command(name = "faithbot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to config.toml (defaults to $FAITHBOT_HOME/config.toml).
    #[arg(long, global = true, env = "FAITHBOT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat relay HTTP server.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long, env = "FAITHBOT_PORT")]
        port: Option<u16>,

        /// Host to bind to (overrides `server.host`).
        #[arg(long, env = "FAITHBOT_HOST")]
        host: Option<String>,
    },

    /// Open an interactive conversation with a running relay.
    Chat {
        /// Base URL of the relay server.
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server: String,

        /// Relay endpoint path or absolute URL.
        #[arg(long)]
        api: Option<String>,

        /// Title shown in the header.
        #[arg(long)]
        title: Option<String>,

        /// Welcome line shown when the conversation opens.
        #[arg(long)]
        welcome: Option<String>,

        /// Seconds to wait for each reply.
        #[arg(long, default_value = "45")]
        timeout_secs: u64,
    },

    /// Send one message through the relay without starting a server.
    Ask {
        /// The message to send.
        message: String,

        /// JSON file holding prior turns: [{"role": "...", "content": "..."}].
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
