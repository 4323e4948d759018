//! Memo layout: maps the semantic model into the fixed block structure of
//! the บันทึกข้อความ form.
//!
//! [`compose`] is pure. Every field is treated as opaque text, so building
//! never fails on malformed input; only downstream serialization can fail.

use crate::DOCUMENT_TITLE;
use crate::common::unit::cm_to_twip;
use crate::docx::block::{StyledBlock, StyledRun};
use crate::memo::{Memo, date};

/// Title size: 50 half-points = 25pt.
pub const TITLE_SIZE_HALF_POINTS: u32 = 50;
/// Field label size: 34 half-points = 17pt. Labels are always bold.
pub const LABEL_SIZE_HALF_POINTS: u32 = 34;
/// Field value and body text size: 40 half-points = 20pt.
pub const VALUE_SIZE_HALF_POINTS: u32 = 40;

/// First-line indent of every declared body line.
pub const BODY_INDENT_CM: f64 = 2.5;

/// Left edge of the signature column: the horizontal midpoint of the text
/// area, measured from the left margin.
pub const SIGNATURE_COLUMN_CM: f64 = 8.0;

/// Trailing space (twips) after the title and after the rows that close the
/// header and reference sections.
const SECTION_GAP_TWIPS: u32 = 240;

/// Compose the full ordered block sequence for a memo snapshot.
///
/// Calling this twice with an unmodified memo produces structurally
/// identical output.
pub fn compose(memo: &Memo) -> Vec<StyledBlock> {
    let mut blocks = Vec::with_capacity(16);

    blocks.push(
        StyledBlock::paragraph(StyledRun::new(DOCUMENT_TITLE, TITLE_SIZE_HALF_POINTS).bold())
            .centered()
            .spacing_after(SECTION_GAP_TWIPS),
    );

    blocks.push(field_row("ส่วนราชการ", &memo.department));
    blocks.push(reference_date_row(memo));
    blocks.push(field_row("เรื่อง", &memo.subject));
    // Extra trailing space separates the header block from the references.
    blocks.push(field_row("เรียน", &memo.salutation).spacing_after(SECTION_GAP_TWIPS));
    blocks.push(field_row("อ้างถึง", &memo.reference_to));
    blocks.push(field_row("สิ่งที่ส่งมาด้วย", &memo.attachments).spacing_after(SECTION_GAP_TWIPS));

    let body_indent = cm_to_twip(BODY_INDENT_CM);
    for field in [&memo.reason, &memo.objective, &memo.conclusion] {
        for line in split_field_lines(field) {
            blocks.push(
                StyledBlock::paragraph(StyledRun::new(line, VALUE_SIZE_HALF_POINTS))
                    .first_line_indent(body_indent),
            );
        }
    }

    blocks.push(
        StyledBlock::paragraph(StyledRun::new(" ", VALUE_SIZE_HALF_POINTS))
            .spacing_after(SECTION_GAP_TWIPS),
    );

    let signer = format!("({}{})", memo.signer_prefix, memo.signer_name);
    blocks.push(signature_line(signer));
    blocks.push(signature_line(memo.signer_position.clone()));

    blocks
}

/// A bold label, a tab stop, then the value at the larger size.
fn field_row(label: &str, value: &str) -> StyledBlock {
    StyledBlock::row(vec![
        StyledRun::new(label, LABEL_SIZE_HALF_POINTS).bold(),
        StyledRun::new(value, VALUE_SIZE_HALF_POINTS).after_tab(),
    ])
}

/// Reference number and date share one logical row as two label/value pairs.
fn reference_date_row(memo: &Memo) -> StyledBlock {
    StyledBlock::row(vec![
        StyledRun::new("ที่", LABEL_SIZE_HALF_POINTS).bold(),
        StyledRun::new(&memo.reference_number, VALUE_SIZE_HALF_POINTS).after_tab(),
        StyledRun::new("วันที่", LABEL_SIZE_HALF_POINTS).bold().after_tab(),
        StyledRun::new(date::format(memo.date), VALUE_SIZE_HALF_POINTS).after_tab(),
    ])
}

/// Centered paragraph in the right-half signature column.
fn signature_line(text: String) -> StyledBlock {
    StyledBlock::paragraph(StyledRun::new(text, VALUE_SIZE_HALF_POINTS))
        .centered()
        .indent_left(cm_to_twip(SIGNATURE_COLUMN_CM))
}

/// Split a multi-line field into per-line paragraph texts.
///
/// Indentation applies per declared line, never per visually wrapped line, so
/// splitting happens on `'\n'` only. An empty line yields a paragraph holding
/// a single space: word processors silently drop zero-run paragraphs, and the
/// space keeps blank separators alive through the round trip.
pub(crate) fn split_field_lines(value: &str) -> Vec<String> {
    value
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                " ".to_string()
            } else {
                line.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::block::BlockAlignment;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn sample_memo() -> Memo {
        let mut memo = Memo::new();
        memo.department = "สำนักนายกรัฐมนตรี".to_string();
        memo.reference_number = "นร ๐๑๐๖/".to_string();
        memo.date = NaiveDate::from_ymd_opt(2024, 5, 10);
        memo.reason = "A\n\nB".to_string();
        memo
    }

    /// Blocks between the header rows and the trailing spacer/signature.
    fn body_blocks(blocks: &[StyledBlock]) -> &[StyledBlock] {
        &blocks[7..blocks.len() - 3]
    }

    #[test]
    fn test_compose_is_pure() {
        let memo = sample_memo();
        assert_eq!(compose(&memo), compose(&memo));
    }

    #[test]
    fn test_title_block() {
        let blocks = compose(&Memo::new());
        let title = &blocks[0];
        assert_eq!(title.text(), "บันทึกข้อความ");
        assert!(title.runs[0].bold);
        assert_eq!(title.runs[0].size_half_points, TITLE_SIZE_HALF_POINTS);
        assert_eq!(title.alignment, BlockAlignment::Center);
        assert!(title.spacing_after_twips.is_some());
    }

    #[test]
    fn test_label_value_size_asymmetry() {
        let memo = sample_memo();
        let blocks = compose(&memo);
        let department = &blocks[1];
        assert!(department.runs[0].bold);
        assert_eq!(department.runs[0].size_half_points, LABEL_SIZE_HALF_POINTS);
        assert!(!department.runs[1].bold);
        assert_eq!(department.runs[1].size_half_points, VALUE_SIZE_HALF_POINTS);
        assert!(department.runs[1].tab_before);
        assert!(
            department.runs[0].size_half_points < department.runs[1].size_half_points,
            "labels render smaller than values"
        );
    }

    #[test]
    fn test_all_sizes_are_even_half_points() {
        let blocks = compose(&sample_memo());
        for block in &blocks {
            for run in &block.runs {
                assert_eq!(run.size_half_points % 2, 0, "size must halve to whole points");
            }
        }
    }

    #[test]
    fn test_reference_and_date_share_a_row() {
        let blocks = compose(&sample_memo());
        let row = &blocks[2];
        assert_eq!(row.runs.len(), 4);
        assert_eq!(row.runs[0].text, "ที่");
        assert_eq!(row.runs[1].text, "นร ๐๑๐๖/");
        assert_eq!(row.runs[2].text, "วันที่");
        assert_eq!(row.runs[3].text, "10 พฤษภาคม 2024");
    }

    #[test]
    fn test_body_lines_and_blank_preservation() {
        let blocks = compose(&sample_memo());
        let body = body_blocks(&blocks);
        // reason "A\n\nB" plus one line each for the empty objective and
        // conclusion fields.
        assert_eq!(body.len(), 5);
        assert_eq!(body[0].text(), "A");
        assert_eq!(body[1].text(), " ");
        assert_eq!(body[2].text(), "B");
        let indent = cm_to_twip(BODY_INDENT_CM);
        for block in &body[..3] {
            assert_eq!(block.first_line_indent_twips, Some(indent));
        }
        assert_eq!(indent, 1417);
    }

    #[test]
    fn test_signature_column() {
        let mut memo = Memo::new();
        memo.signer_prefix = "นาย".to_string();
        memo.signer_name = "สมชาย ใจดี".to_string();
        memo.signer_position = "ปลัดกระทรวง".to_string();

        let blocks = compose(&memo);
        let name = &blocks[blocks.len() - 2];
        let position = &blocks[blocks.len() - 1];
        assert_eq!(name.text(), "(นายสมชาย ใจดี)");
        assert_eq!(position.text(), "ปลัดกระทรวง");
        for block in [name, position] {
            assert_eq!(block.alignment, BlockAlignment::Center);
            assert_eq!(block.indent_left_twips, Some(cm_to_twip(SIGNATURE_COLUMN_CM)));
        }
    }

    #[test]
    fn test_signature_without_prefix() {
        let mut memo = Memo::new();
        memo.signer_name = "สมหญิง รักเรียน".to_string();
        let blocks = compose(&memo);
        assert_eq!(blocks[blocks.len() - 2].text(), "(สมหญิง รักเรียน)");
    }

    proptest! {
        /// Re-joining the split lines with '\n' (normalizing the single-space
        /// blank marker back to an empty line) reconstructs the field exactly.
        #[test]
        fn prop_line_split_round_trips(
            lines in prop::collection::vec("[^\n]*", 0..8)
                .prop_filter("a literal single-space line is indistinguishable from a blank", |ls| {
                    ls.iter().all(|l| l != " ")
                })
        ) {
            let value = lines.join("\n");
            let rejoined = split_field_lines(&value)
                .iter()
                .map(|p| if p == " " { "" } else { p.as_str() })
                .collect::<Vec<_>>()
                .join("\n");
            prop_assert_eq!(rejoined, value);
        }
    }
}
