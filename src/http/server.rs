//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::http::handlers::{favicon, healthz, vanity_handler};
use crate::http::request::{request_id, MakeRequestUuid, X_REQUEST_ID};
use crate::routing::SharedResolver;

/// Upper bound on handling a single request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: SharedResolver,
}

/// HTTP server for vanity import paths.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server answering from `resolver`.
    pub fn new(resolver: SharedResolver) -> Self {
        let state = AppState { resolver };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/healthz", get(healthz))
            .route("/favicon.ico", get(favicon))
            .route("/", any(vanity_handler))
            .route("/{*path}", any(vanity_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        request_id = %request_id(request),
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The configured router, for serving or for driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain open requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
