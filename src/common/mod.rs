//! Shared infrastructure used by both export pipelines.

pub mod error;
pub mod unit;

pub use error::{Error, Result};
