//! Error types for the test suite
//!
//! Everything here is fatal for the current scenario except lookup misses,
//! which never reach this enum: missing properties and credentials are
//! reported as absent values and handled at the call site.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the test suite
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Invalid configuration file '{path}': {error}")]
    ConfigParse { path: String, error: String },

    // === Session Errors ===
    #[error("Appium server URL is missing or empty in the configuration")]
    MissingServerUrl,

    #[error("Invalid Appium server URL '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("Failed to create Appium session: {0}")]
    NewSession(#[from] fantoccini::error::NewSessionError),

    #[error("No session active. The driver was quit or never created")]
    SessionClosed,

    // === Timeout Errors ===
    #[error("Timed out after {waited_secs}s waiting for {element}")]
    WaitTimeout { element: String, waited_secs: u64 },

    // === Assertion Errors ===
    #[error("{what}: expected '{expected}', got '{actual}'")]
    Assertion {
        what: String,
        expected: String,
        actual: String,
    },

    // === WebDriver Errors ===
    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an assertion failure reporting both sides of the mismatch
    pub fn assertion(what: &str, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Assertion {
            what: what.to_string(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
