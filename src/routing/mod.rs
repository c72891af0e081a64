//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → resolver.rs (current snapshot)
//!     → table.rs (binary search, then bounded prefix scan)
//!     → Return: (entry, subpath) or no match
//!
//! Table construction (startup and reload):
//!     validated RouteEntry[]
//!     → sort by path (byte-wise)
//!     → freeze as immutable RouteTable
//!     → publish via ArcSwap
//! ```
//!
//! # Design Decisions
//! - Tables built once per config load, immutable at runtime
//! - No regex or wildcards; prefix matching on `/` boundaries only
//! - Deterministic: same entry set always resolves the same way
//! - Longest matching prefix wins

pub mod entry;
pub mod resolver;
pub mod table;

pub use entry::{RouteEntry, VcsKind};
pub use resolver::{ResponsePolicy, Resolver, SharedResolver};
pub use table::{Resolution, RouteTable};
