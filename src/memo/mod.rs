//! The semantic memo model and its supporting formatters.

pub mod date;
pub mod model;

pub use model::Memo;
