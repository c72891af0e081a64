//! Vanity import path server.
//!
//! Answers `go get` style metadata requests for a set of configured import
//! path prefixes.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request           ┌──────────────────────────────────────────────┐
//!     ─────────────────────────┼─▶ http server ──▶ routing ──▶ render         │
//!                              │   (axum)          resolver     vanity/index   │
//!     Client Response          │                   (ArcSwap)                   │
//!     ◀────────────────────────┼─────────────────────────────────┘             │
//!                              │                      ▲                        │
//!                              │   config ────────────┘ (load, validate,       │
//!                              │   watcher               swap on reload)       │
//!                              │                                               │
//!                              │   lifecycle · observability                   │
//!                              └──────────────────────────────────────────────┘
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vanity_router::lifecycle::{self, StartupOptions};
use vanity_router::observability::logging::{init_logging, LogFormat};

#[derive(Parser)]
#[command(name = "vanity-router", version)]
#[command(about = "Serves vanity import path metadata", long_about = None)]
struct Cli {
    /// Configuration file (YAML, or TOML with a .toml extension)
    #[arg(default_value = "vanity.yaml")]
    config: PathBuf,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Address to bind
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: IpAddr,

    /// Reload routes when the configuration file changes
    #[arg(short, long)]
    watch: bool,

    /// Expose Prometheus metrics on this address
    #[arg(long, env = "METRICS_ADDRESS")]
    metrics_address: Option<SocketAddr>,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "vanity-router starting");

    let options = StartupOptions {
        config_path: cli.config,
        bind_address: SocketAddr::new(cli.bind, cli.port),
        watch: cli.watch,
        metrics_address: cli.metrics_address,
    };

    match lifecycle::run(options).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            ExitCode::FAILURE
        }
    }
}
