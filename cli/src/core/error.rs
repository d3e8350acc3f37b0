//! # HAL9000 Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the HAL9000 chat demo.
//! Conversational failures never surface here: an unknown command is just a
//! message on the display. These errors cover the ambient machinery around the
//! agent (configuration, rule compilation, the speech program, terminal input).
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `HalError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if config.display.width < MIN_DISPLAY_WIDTH {
//!     return Err(HalError::Config(format!("width {} too small", config.display.width)))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the HAL9000 application.
#[derive(Error, Debug)]
pub enum HalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid rule pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("External command failed: {cmd}, Status: {status}")]
    ExternalCommand { cmd: String, status: String },

    #[error("Terminal input error: {source}")]
    Terminal {
        #[from]
        source: rustyline::error::ReadlineError,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = HalError::Config("display.width must be at least 20".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: display.width must be at least 20"
        );

        let cmd_err = HalError::ExternalCommand {
            cmd: "espeak hello".into(),
            status: "exit status: 1".into(),
        };
        assert_eq!(
            cmd_err.to_string(),
            "External command failed: espeak hello, Status: exit status: 1"
        );
    }

    #[test]
    fn test_pattern_error_names_pattern() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = HalError::Pattern {
            pattern: "(unclosed".into(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid rule pattern '(unclosed'"));
    }
}
