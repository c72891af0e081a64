//! Vanity import path resolution and serving.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::VanityConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Resolution, Resolver, RouteEntry, RouteTable, VcsKind};
