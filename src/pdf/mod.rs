//! Raster export: single-page PDF synthesis.
//!
//! The export does not lay text out itself; it embeds a bitmap captured from
//! the rendered form onto one fixed-size page, so the PDF is print-exact by
//! construction and single-page by construction.

pub mod page;
pub mod writer;

pub use page::{PageGeometry, PageImage};
