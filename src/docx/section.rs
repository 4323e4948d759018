//! Section properties: page size, orientation, and margins.

use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::common::unit::{
    MARGIN_BOTTOM_CM, MARGIN_LEFT_CM, MARGIN_RIGHT_CM, MARGIN_TOP_CM, cm_to_twip,
};

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOrientation {
    Portrait,
    Landscape,
}

impl PageOrientation {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Section properties including page setup and margins, all in twips.
#[derive(Debug, Clone)]
pub struct SectionProperties {
    /// Page width in twips (twentieth of a point, 1440 = 1 inch)
    pub page_width: u32,
    /// Page height in twips
    pub page_height: u32,
    /// Page orientation
    pub orientation: PageOrientation,
    /// Top margin in twips
    pub margin_top: u32,
    /// Right margin in twips
    pub margin_right: u32,
    /// Bottom margin in twips
    pub margin_bottom: u32,
    /// Left margin in twips
    pub margin_left: u32,
}

impl Default for SectionProperties {
    fn default() -> Self {
        Self::memo()
    }
}

impl SectionProperties {
    /// The memo sheet: A4 portrait (210mm x 297mm) with the fixed margin
    /// frame of the บันทึกข้อความ form.
    pub fn memo() -> Self {
        Self {
            page_width: 11906,  // 210mm
            page_height: 16838, // 297mm
            orientation: PageOrientation::Portrait,
            margin_top: cm_to_twip(MARGIN_TOP_CM),
            margin_right: cm_to_twip(MARGIN_RIGHT_CM),
            margin_bottom: cm_to_twip(MARGIN_BOTTOM_CM),
            margin_left: cm_to_twip(MARGIN_LEFT_CM),
        }
    }

    /// Serialize as `<w:sectPr>`; must be the last element inside `<w:body>`.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:sectPr>");
        write!(
            xml,
            "<w:pgSz w:w=\"{}\" w:h=\"{}\" w:orient=\"{}\"/>",
            self.page_width,
            self.page_height,
            self.orientation.as_str()
        )?;
        write!(
            xml,
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\"/>",
            self.margin_top, self.margin_right, self.margin_bottom, self.margin_left
        )?;
        xml.push_str("</w:sectPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_preset() {
        let section = SectionProperties::memo();
        assert_eq!(section.page_width, 11906);
        assert_eq!(section.page_height, 16838);
        assert_eq!(section.orientation, PageOrientation::Portrait);
        assert_eq!(section.margin_top, 850);
        assert_eq!(section.margin_right, 1134);
        assert_eq!(section.margin_bottom, 1417);
        assert_eq!(section.margin_left, 1701);
    }

    #[test]
    fn test_sect_pr_xml() {
        let mut xml = String::new();
        SectionProperties::memo().to_xml(&mut xml).unwrap();
        assert!(xml.starts_with("<w:sectPr>"));
        assert!(xml.contains("<w:pgSz w:w=\"11906\" w:h=\"16838\" w:orient=\"portrait\"/>"));
        assert!(xml.contains("w:left=\"1701\""));
        assert!(xml.ends_with("</w:sectPr>"));
    }
}
