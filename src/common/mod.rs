//! Shared utilities: error taxonomy and logging setup

pub mod error;
pub mod logging;

pub use error::{Error, Result};
