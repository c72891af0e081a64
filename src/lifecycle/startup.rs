//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize subsystems in dependency order
//! - Start background tasks (config watcher, reloader, signal listener)
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, once a valid route table exists

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::watcher::ConfigWatcher;
use crate::config::{load_config, ConfigError};
use crate::http::HttpServer;
use crate::lifecycle::reload::run_reloader;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::spawn_signal_listener;
use crate::observability::metrics;
use crate::routing::Resolver;

/// Everything the binary decides before handing over.
#[derive(Debug, Clone)]
pub struct StartupOptions {
    pub config_path: PathBuf,
    pub bind_address: SocketAddr,
    /// Reload routes when the config file changes.
    pub watch: bool,
    pub metrics_address: Option<SocketAddr>,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to watch config file: {0}")]
    Watch(#[from] notify::Error),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start every subsystem and serve until a stop signal arrives.
pub async fn run(options: StartupOptions) -> Result<(), StartupError> {
    let config = load_config(&options.config_path)?;
    tracing::info!(
        config = %options.config_path.display(),
        routes = config.entries.len(),
        host = config.policy.host.as_deref().unwrap_or("<request host>"),
        cache_control = %config.policy.cache_control,
        "Configuration loaded"
    );

    if let Some(addr) = options.metrics_address {
        metrics::init_metrics(addr)?;
    }

    let resolver = Resolver::from_config(config);
    metrics::set_route_count(resolver.table().len());
    let resolver = resolver.into_shared();

    let shutdown = Shutdown::new();

    // Keep the watcher alive until the server returns.
    let _watcher = if options.watch {
        let (watcher, updates) = ConfigWatcher::new(&options.config_path);
        let handle = watcher.run()?;
        tokio::spawn(run_reloader(resolver.clone(), updates, shutdown.subscribe()));
        Some(handle)
    } else {
        None
    };

    let listener = TcpListener::bind(options.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: options.bind_address,
            source,
        })?;
    tracing::info!(
        address = %options.bind_address,
        "Listening for connections"
    );

    spawn_signal_listener(shutdown.clone());

    HttpServer::new(resolver)
        .run(listener, shutdown.subscribe())
        .await
        .map_err(StartupError::Serve)?;

    shutdown.trigger();
    Ok(())
}
