//! Configuration system for the hotel client.
//!
//! Settings are merged from several sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`), used for
//!    command-line flags
//! 2. Environment variables (`HOTEL_*`)
//! 3. The data directory's `config.yaml`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use hotel::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir(Path::new("/tmp/hotel"))
//!     .build()
//!     .unwrap();
//! println!("cells are {} wide", config.column_width());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_COLUMN_WIDTH, DEFAULT_LOCK_WAIT_SECONDS, MAX_COLUMN_WIDTH};
pub use validator::ConfigValidator;
