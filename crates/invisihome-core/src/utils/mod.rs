//! Utility functions for display formatting.

pub mod format;

pub use format::{format_kb, format_thousands, truncate_string};
