//! Rubopop - command-line configuration for RuboCop todo pull requests
//!
//! Rubopop resolves the options of a workflow that splits `.rubocop_todo.yml`
//! into pull requests: which branches to compare, how many pull requests to
//! open per run, what to run after each checkout, and where to push.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

// Re-export commonly used types
pub use cli::{ConfigurationResolver, Resolution};
pub use config::Configuration;
pub use error::{OptionsError, Result, RubopopError};

/// Current version of Rubopop
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum `hub` version required by default; override at build time with
/// `RUBOPOP_HUB_VERSION`
pub const HUB_VERSION: &str = match option_env!("RUBOPOP_HUB_VERSION") {
    Some(version) => version,
    None => "2.2.9",
};
