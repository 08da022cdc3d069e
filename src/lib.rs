//! Appium-driven UI test suite for the Crunchyroll Android app
//!
//! Drives the app over the W3C WebDriver protocol using page objects,
//! YAML-backed configuration and bounded-polling waits.

pub mod common;
pub mod config;
pub mod context;
pub mod driver;
pub mod scenarios;
pub mod screens;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use context::{with_context, TestContext};
