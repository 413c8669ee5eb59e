//! Common utilities: errors, paths, configuration and logging

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
