//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, attribution text)
//! - CLI option types and parsing
//! - Validation of values clap cannot check

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
