//! The raster exporter: form capture to single-page PDF.

use std::sync::Arc;

use image::GenericImageView;
use image::codecs::jpeg::JpegEncoder;

use crate::common::error::{Error, Result};
use crate::export::hooks::{ByteSink, ChromeControl, RegionSource};
use crate::pdf;
use crate::pdf::page::{PageGeometry, PageImage};

/// Oversampling factor applied during capture to preserve print fidelity.
pub const OVERSAMPLE: u32 = 3;

/// Fixed, content-independent output file name, derived from the document
/// title.
pub const PDF_FILE_NAME: &str = "บันทึกข้อความ.pdf";

const JPEG_QUALITY: u8 = 90;

/// Captures the rendered form as a raster and embeds it on one A4 page.
pub struct RasterExporter {
    region: Arc<dyn RegionSource>,
    chrome: Arc<dyn ChromeControl>,
    sink: Arc<dyn ByteSink>,
}

/// Hides chrome on construction and restores it on drop, so restoration is
/// guaranteed on both the success and failure paths.
struct ChromeGuard<'a>(&'a dyn ChromeControl);

impl<'a> ChromeGuard<'a> {
    fn hide(chrome: &'a dyn ChromeControl) -> Self {
        chrome.hide();
        Self(chrome)
    }
}

impl Drop for ChromeGuard<'_> {
    fn drop(&mut self) {
        self.0.show();
    }
}

impl RasterExporter {
    pub fn new(
        region: Arc<dyn RegionSource>,
        chrome: Arc<dyn ChromeControl>,
        sink: Arc<dyn ByteSink>,
    ) -> Self {
        Self {
            region,
            chrome,
            sink,
        }
    }

    /// Capture the export region into a page-ready image.
    ///
    /// Interactive chrome is hidden for the duration of the capture and
    /// restored before this returns, whether or not the capture succeeded.
    pub async fn capture(&self) -> Result<PageImage> {
        let _chrome = ChromeGuard::hide(self.chrome.as_ref());

        let bytes = self.region.capture(OVERSAMPLE).await?;
        let raster = image::load_from_memory(&bytes)?;
        let (width_px, height_px) = raster.dimensions();
        if width_px == 0 || height_px == 0 {
            return Err(Error::Capture("captured region is empty".to_string()));
        }
        log::debug!("captured region at {width_px}x{height_px}px");

        let mut jpeg = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
        encoder.encode_image(&raster.to_rgb8())?;

        Ok(PageImage {
            jpeg,
            width_px,
            height_px,
            geometry: PageGeometry::a4_portrait(),
        })
    }

    /// Run the full raster export: capture, assemble the PDF page, save.
    pub async fn export(&self) -> Result<()> {
        let page = self.capture().await?;
        let bytes = pdf::writer::render(&page)?;
        log::debug!("rendered {} PDF bytes", bytes.len());
        self.sink.save(&bytes, PDF_FILE_NAME).await
    }
}
