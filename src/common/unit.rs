//! Unit conversion utilities.
//!
//! The two output formats measure in different native units: WordprocessingML
//! uses twips (twentieths of a point) for page metrics and half-points for
//! font sizes, while PDF user space uses points. The memo layout itself is
//! specified in centimeters. All conversions between those systems live here.

pub const TWIPS_PER_INCH: i64 = 1_440;
pub const TWIPS_PER_PT: i64 = 20;
pub const HALF_POINTS_PER_PT: i64 = 2;
pub const PT_PER_INCH: f64 = 72.0;
pub const CM_PER_INCH: f64 = 2.54;

/// Fixed page geometry of the memo sheet: A4 portrait.
pub const PAGE_WIDTH_CM: f64 = 21.0;
pub const PAGE_HEIGHT_CM: f64 = 29.7;

/// Margin frame of the memo sheet, clockwise from the top.
pub const MARGIN_TOP_CM: f64 = 1.5;
pub const MARGIN_RIGHT_CM: f64 = 2.0;
pub const MARGIN_BOTTOM_CM: f64 = 2.5;
pub const MARGIN_LEFT_CM: f64 = 3.0;

#[inline]
pub fn cm_to_twip(cm: f64) -> u32 {
    (cm * TWIPS_PER_INCH as f64 / CM_PER_INCH).round() as u32
}

#[inline]
pub fn cm_to_pt(cm: f64) -> f64 {
    cm * PT_PER_INCH / CM_PER_INCH
}

#[inline]
pub fn pt_to_twip(pt: f64) -> u32 {
    (pt * TWIPS_PER_PT as f64).round() as u32
}

#[inline]
pub fn half_point_to_pt(half_points: u32) -> f64 {
    half_points as f64 / HALF_POINTS_PER_PT as f64
}

#[inline]
pub fn pt_to_half_point(pt: f64) -> u32 {
    (pt * HALF_POINTS_PER_PT as f64).round() as u32
}

/// Width of the text area between the left and right margins.
#[inline]
pub fn text_width_cm() -> f64 {
    PAGE_WIDTH_CM - MARGIN_LEFT_CM - MARGIN_RIGHT_CM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_twip() {
        assert_eq!(cm_to_twip(2.54), 1440);
        assert_eq!(cm_to_twip(2.5), 1417);
        assert_eq!(cm_to_twip(1.5), 850);
        assert_eq!(cm_to_twip(3.0), 1701);
    }

    #[test]
    fn test_half_point_round_trip() {
        assert_eq!(half_point_to_pt(50), 25.0);
        assert_eq!(half_point_to_pt(40), 20.0);
        assert_eq!(half_point_to_pt(34), 17.0);
        assert_eq!(pt_to_half_point(17.0), 34);
    }

    #[test]
    fn test_page_points() {
        assert!((cm_to_pt(PAGE_WIDTH_CM) - 595.275).abs() < 0.01);
        assert!((cm_to_pt(PAGE_HEIGHT_CM) - 841.889).abs() < 0.01);
    }

    #[test]
    fn test_text_width() {
        assert!((text_width_cm() - 16.0).abs() < f64::EPSILON);
    }
}
