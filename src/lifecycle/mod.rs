//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build resolver → Bind listener → Serve
//!
//! Reload (reload.rs):
//!     Watcher update → Build new resolver → Atomic swap
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT → Broadcast → Stop accepting → Drain → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, listener last
//! - One broadcast stops the server and the reloader together

pub mod reload;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{run, StartupError, StartupOptions};
