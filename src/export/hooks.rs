//! Capability interfaces for the external collaborators.
//!
//! The synthesis pipeline has no dependency on any presentation layer. The
//! host injects these hooks: how a region becomes pixels, where bytes go,
//! which chrome overlaps the capture region, and how status reaches the
//! user. Everything behind them is testable headlessly.

use async_trait::async_trait;

use crate::common::error::Result;

/// Severity of a user-facing status notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// User-facing status reporting (toast presentation belongs to the host).
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str);
}

/// Visibility toggle for interactive chrome overlapping the capture region.
/// The exporter does not know what that chrome is; it only brackets the
/// capture with `hide` and `show`.
pub trait ChromeControl: Send + Sync {
    fn hide(&self);
    fn show(&self);
}

/// Rasterization of the export region.
#[async_trait]
pub trait RegionSource: Send + Sync {
    /// Rasterize the visible region at `oversample`x resolution and return
    /// the encoded raster bytes (any format the `image` crate can decode).
    ///
    /// An inaccessible region (detached, zero-size) reports
    /// [`crate::Error::Capture`].
    async fn capture(&self, oversample: u32) -> Result<Vec<u8>>;
}

/// Persistence of a produced file (download, save dialog, disk write).
#[async_trait]
pub trait ByteSink: Send + Sync {
    async fn save(&self, bytes: &[u8], filename: &str) -> Result<()>;
}
