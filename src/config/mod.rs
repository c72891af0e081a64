//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML/TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (normalize, infer, validate)
//!     → VanityConfig (sorted RouteEntry[] + ResponsePolicy)
//!     → Resolver built from it
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → lifecycle::reload swaps the Resolver atomically
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - Every field is optional so minimal configs work
//! - Validation separates syntactic (serde) from semantic checks
//! - A config that fails validation never reaches the route table

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError, ConfigFormat};
pub use schema::{ConfigFile, PathConfig};
pub use validation::{validate_config, ValidationError, VanityConfig};
