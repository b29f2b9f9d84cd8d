//! CLI interface and argument parsing
//!
//! This module turns the process arguments into a resolved configuration
//! and renders the usage text.

pub mod app;

// Re-export main types
pub use app::*;
