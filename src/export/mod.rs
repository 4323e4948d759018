//! Export pipeline: collaborator hooks, the raster exporter, and the
//! orchestrator sequencing user-triggered exports.

pub mod hooks;
pub mod orchestrator;
pub mod raster;

pub use hooks::{ByteSink, ChromeControl, NoticeKind, Notifier, RegionSource};
pub use orchestrator::{DOCX_FILE_NAME, ExportOrchestrator, Outcome};
pub use raster::{OVERSAMPLE, PDF_FILE_NAME, RasterExporter};
