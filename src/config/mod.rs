//! Configuration model and option registry
//!
//! This module holds the resolved configuration record and the ordered list
//! of option definitions the command-line parser is built from.

pub mod options;
pub mod types;

// Re-export main types
pub use options::*;
pub use types::*;
