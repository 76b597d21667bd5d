//! Shared utilities.
//!
//! - [`config`] - Book layout configuration (`bookindex.json`)

pub mod config;

pub use config::*;
