//! Route table reload.
//!
//! # Responsibilities
//! - Turn each validated configuration into a new Resolver
//! - Publish it with a single atomic swap
//!
//! # Design Decisions
//! - Readers never see a partially built table: the new Resolver is
//!   complete before `store`
//! - Requests already holding the old snapshot finish against it

use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::{broadcast, mpsc};

use crate::config::VanityConfig;
use crate::observability::metrics;
use crate::routing::{Resolver, SharedResolver};

/// Build a resolver from `config` and swap it in.
pub fn apply_config(resolver: &ArcSwap<Resolver>, config: VanityConfig) {
    let next = Resolver::from_config(config);
    let routes = next.table().len();

    resolver.store(Arc::new(next));

    metrics::set_route_count(routes);
    metrics::record_reload(true);
    tracing::info!(routes, "Route table reloaded");
}

/// Apply configuration updates until shutdown or until the sender is gone.
pub async fn run_reloader(
    resolver: SharedResolver,
    mut updates: mpsc::UnboundedReceiver<VanityConfig>,
    mut shutdown: broadcast::Receiver<()>,
) {
    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Some(config) => apply_config(&resolver, config),
                None => break,
            },
            _ = shutdown.recv() => break,
        }
    }
    tracing::debug!("Reloader stopped");
}
