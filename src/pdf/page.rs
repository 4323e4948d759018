//! Page geometry and the captured page image.

use crate::common::unit::{PAGE_HEIGHT_CM, PAGE_WIDTH_CM, cm_to_pt};

/// Physical page dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_cm: f64,
    pub height_cm: f64,
}

impl PageGeometry {
    /// The fixed memo page: A4 portrait, 21 cm x 29.7 cm.
    pub fn a4_portrait() -> Self {
        Self {
            width_cm: PAGE_WIDTH_CM,
            height_cm: PAGE_HEIGHT_CM,
        }
    }

    /// Page width in PDF user-space points.
    pub fn width_pt(&self) -> f64 {
        cm_to_pt(self.width_cm)
    }

    /// Page height in PDF user-space points.
    pub fn height_pt(&self) -> f64 {
        cm_to_pt(self.height_cm)
    }
}

/// A captured raster ready for page embedding: JPEG payload plus the page it
/// will be stretched onto. Created per export, consumed by page assembly,
/// then discarded.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// JPEG-encoded raster
    pub jpeg: Vec<u8>,
    /// Raster width in pixels (after oversampling)
    pub width_px: u32,
    /// Raster height in pixels (after oversampling)
    pub height_px: u32,
    /// Target page dimensions
    pub geometry: PageGeometry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_points() {
        let page = PageGeometry::a4_portrait();
        assert!((page.width_pt() - 595.28).abs() < 0.01);
        assert!((page.height_pt() - 841.89).abs() < 0.01);
    }
}
