//! Sarabun - A Rust library for rendering Thai government memorandums
//!
//! This library takes one semantic memo model (บันทึกข้อความ, the fixed-format
//! internal correspondence document) and deterministically produces two output
//! documents that follow the same formatting rules:
//!
//! - **Structured export**: a `.docx` word-processor document built directly
//!   from the model fields (title, label/value rows, indented body paragraphs,
//!   signature column), with TH Sarabun New as the document-wide font.
//! - **Raster export**: a single-page A4 `.pdf` that embeds a captured bitmap
//!   of the rendered form, preserved at print fidelity.
//!
//! The rendering of the on-screen form, the file save dialog, and the raster
//! capture itself belong to the host; they are injected through the capability
//! traits in [`export::hooks`], so the synthesis pipeline stays headless and
//! testable.
//!
//! # Example - Building a DOCX
//!
//! ```
//! use sarabun::{Memo, compose};
//! use sarabun::docx::package;
//!
//! let mut memo = Memo::new();
//! memo.department = "สำนักนายกรัฐมนตรี".to_string();
//! memo.subject = "ขอเชิญประชุม".to_string();
//! memo.reason = "ตามที่ได้มีการประชุมครั้งก่อน\n\nจึงเรียนมาเพื่อโปรดทราบ".to_string();
//!
//! let blocks = compose(&memo);
//! let bytes = package::pack(&blocks)?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), sarabun::Error>(())
//! ```
//!
//! # Example - Orchestrated export
//!
//! ```no_run
//! use std::sync::Arc;
//! use sarabun::{ExportOrchestrator, Memo};
//! # use sarabun::{ByteSink, ChromeControl, Notifier, NoticeKind, RegionSource, Result};
//! # struct Host;
//! # impl ChromeControl for Host { fn hide(&self) {} fn show(&self) {} }
//! # impl Notifier for Host { fn notify(&self, _: NoticeKind, _: &str, _: &str) {} }
//! # #[async_trait::async_trait]
//! # impl RegionSource for Host {
//! #     async fn capture(&self, _oversample: u32) -> Result<Vec<u8>> { Ok(Vec::new()) }
//! # }
//! # #[async_trait::async_trait]
//! # impl ByteSink for Host {
//! #     async fn save(&self, _bytes: &[u8], _filename: &str) -> Result<()> { Ok(()) }
//! # }
//!
//! # async fn run() {
//! let host = Arc::new(Host);
//! let orchestrator = ExportOrchestrator::new(
//!     host.clone(), // rasterizes the visible form
//!     host.clone(), // hides interactive chrome during capture
//!     host.clone(), // saves the produced files
//!     host.clone(), // surfaces status notifications
//! );
//!
//! let memo = Memo::new();
//! // Word first, then PDF, sequenced on completion.
//! orchestrator.export_combined(memo.snapshot()).await;
//! # }
//! ```

/// Shared support layer: unified error type and unit conversions.
pub mod common;

/// Structured export: styled block model, memo layout, and `.docx` packaging.
pub mod docx;

/// Export pipeline: collaborator hooks, the raster exporter, and the
/// orchestrator that sequences user-triggered exports.
pub mod export;

/// The semantic memo model and the Thai long-form date formatter.
pub mod memo;

/// Raster export: page geometry and single-page PDF synthesis.
pub mod pdf;

// Re-export commonly used types for convenience
pub use common::error::{Error, Result};
pub use docx::block::{BlockAlignment, StyledBlock, StyledRun};
pub use docx::builder::compose;
pub use export::hooks::{ByteSink, ChromeControl, NoticeKind, Notifier, RegionSource};
pub use export::orchestrator::{DOCX_FILE_NAME, ExportOrchestrator, Outcome};
pub use export::raster::{OVERSAMPLE, PDF_FILE_NAME, RasterExporter};
pub use memo::model::Memo;
pub use pdf::page::{PageGeometry, PageImage};

/// Fixed document title. Both export file names derive from it.
pub const DOCUMENT_TITLE: &str = "บันทึกข้อความ";
