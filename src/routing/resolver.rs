//! Resolver facade handed to the HTTP layer.
//!
//! # Responsibilities
//! - Own the current route table and the response policy that goes with it
//! - Expose `resolve` as the only lookup operation
//!
//! # Design Decisions
//! - A reload builds a whole new `Resolver` and swaps it in through
//!   `ArcSwap`; a published resolver is never mutated
//! - Requests load one snapshot and use it for the full response

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::VanityConfig;
use crate::routing::table::{Resolution, RouteTable};

/// Resolver shared between request handlers and the reload task.
pub type SharedResolver = Arc<ArcSwap<Resolver>>;

/// Default `Cache-Control` max-age, 24 hours.
pub const DEFAULT_CACHE_MAX_AGE: u64 = 86_400;

/// Settings passed through untouched to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePolicy {
    /// Host used in import paths. `None` means use the request's host.
    pub host: Option<String>,
    /// Value of the `Cache-Control` header on vanity responses.
    pub cache_control: String,
}

impl ResponsePolicy {
    pub fn new(host: Option<String>, cache_max_age: u64) -> Self {
        Self {
            host: host.filter(|h| !h.is_empty()),
            cache_control: format!("public, max-age={}", cache_max_age),
        }
    }

    /// Configured host, or the one the request was addressed to.
    pub fn host_or<'a>(&'a self, request_host: &'a str) -> &'a str {
        self.host.as_deref().unwrap_or(request_host)
    }
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self::new(None, DEFAULT_CACHE_MAX_AGE)
    }
}

/// Lookup facade over an immutable [`RouteTable`].
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    table: Arc<RouteTable>,
    policy: ResponsePolicy,
}

impl Resolver {
    pub fn new(table: RouteTable, policy: ResponsePolicy) -> Self {
        Self {
            table: Arc::new(table),
            policy,
        }
    }

    /// Build from a validated configuration.
    pub fn from_config(config: VanityConfig) -> Self {
        Self::new(RouteTable::build(config.entries), config.policy)
    }

    /// Wrap in the shared handle used by the server.
    pub fn into_shared(self) -> SharedResolver {
        Arc::new(ArcSwap::from_pointee(self))
    }

    pub fn resolve<'t, 'q>(&'t self, path: &'q str) -> Option<Resolution<'t, 'q>> {
        self.table.resolve(path)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn policy(&self) -> &ResponsePolicy {
        &self.policy
    }
}
