//! WordprocessingML serialization of styled blocks.

use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::docx::block::{BlockAlignment, StyledBlock, StyledRun};

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Serialize one block as a `<w:p>` element.
pub(crate) fn block_to_xml(block: &StyledBlock, xml: &mut String) -> Result<()> {
    xml.push_str("<w:p>");

    let has_ppr = block.alignment != BlockAlignment::Left
        || block.spacing_after_twips.is_some()
        || block.first_line_indent_twips.is_some()
        || block.indent_left_twips.is_some();

    if has_ppr {
        xml.push_str("<w:pPr>");

        if block.alignment != BlockAlignment::Left {
            write!(xml, "<w:jc w:val=\"{}\"/>", block.alignment.as_str())?;
        }

        if let Some(after) = block.spacing_after_twips {
            write!(xml, "<w:spacing w:after=\"{}\"/>", after)?;
        }

        if block.first_line_indent_twips.is_some() || block.indent_left_twips.is_some() {
            xml.push_str("<w:ind");
            if let Some(left) = block.indent_left_twips {
                write!(xml, " w:left=\"{}\"", left)?;
            }
            if let Some(first_line) = block.first_line_indent_twips {
                write!(xml, " w:firstLine=\"{}\"", first_line)?;
            }
            xml.push_str("/>");
        }

        xml.push_str("</w:pPr>");
    }

    for run in &block.runs {
        run_to_xml(run, xml)?;
    }

    xml.push_str("</w:p>");
    Ok(())
}

/// Serialize one run as a `<w:r>` element.
///
/// Sizes are written to both `w:sz` and `w:szCs` so Thai complex-script text
/// renders at the same size as Latin text.
fn run_to_xml(run: &StyledRun, xml: &mut String) -> Result<()> {
    xml.push_str("<w:r>");
    xml.push_str("<w:rPr>");
    if run.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    write!(
        xml,
        "<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>",
        run.size_half_points
    )?;
    xml.push_str("</w:rPr>");

    if run.tab_before {
        xml.push_str("<w:tab/>");
    }
    if !run.text.is_empty() {
        write!(
            xml,
            "<w:t xml:space=\"preserve\">{}</w:t>",
            escape_xml(&run.text)
        )?;
    }

    xml.push_str("</w:r>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_plain_block() {
        let block = StyledBlock::paragraph(StyledRun::new("สวัสดี", 40));
        let mut xml = String::new();
        block_to_xml(&block, &mut xml).unwrap();
        assert_eq!(
            xml,
            "<w:p><w:r><w:rPr><w:sz w:val=\"40\"/><w:szCs w:val=\"40\"/></w:rPr>\
             <w:t xml:space=\"preserve\">สวัสดี</w:t></w:r></w:p>"
        );
    }

    #[test]
    fn test_bold_label_with_tabbed_value() {
        let block = StyledBlock::row(vec![
            StyledRun::new("เรื่อง", 34).bold(),
            StyledRun::new("ขอเชิญประชุม", 40).after_tab(),
        ]);
        let mut xml = String::new();
        block_to_xml(&block, &mut xml).unwrap();
        assert!(xml.contains("<w:b/><w:bCs/>"));
        assert!(xml.contains("<w:sz w:val=\"34\"/>"));
        assert!(xml.contains("<w:tab/><w:t xml:space=\"preserve\">ขอเชิญประชุม</w:t>"));
    }

    #[test]
    fn test_paragraph_properties() {
        let block = StyledBlock::paragraph(StyledRun::new("x", 40))
            .centered()
            .indent_left(4535)
            .first_line_indent(1417)
            .spacing_after(240);
        let mut xml = String::new();
        block_to_xml(&block, &mut xml).unwrap();
        assert!(xml.contains("<w:jc w:val=\"center\"/>"));
        assert!(xml.contains("<w:spacing w:after=\"240\"/>"));
        assert!(xml.contains("<w:ind w:left=\"4535\" w:firstLine=\"1417\"/>"));
    }

    #[test]
    fn test_blank_marker_survives() {
        // A single-space run must produce a w:t, not an empty run, so the
        // paragraph is not collapsed by word processors.
        let block = StyledBlock::paragraph(StyledRun::new(" ", 40));
        let mut xml = String::new();
        block_to_xml(&block, &mut xml).unwrap();
        assert!(xml.contains("<w:t xml:space=\"preserve\"> </w:t>"));
    }
}
