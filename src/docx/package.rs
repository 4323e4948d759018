//! `.docx` package assembly.
//!
//! Serializes a composed block sequence into a complete OPC archive:
//! `[Content_Types].xml`, the package and part relationships, the document
//! body, and a stylesheet that sets the document-wide Thai typeface.

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::common::error::Result;
use crate::docx::block::StyledBlock;
use crate::docx::paragraph::block_to_xml;
use crate::docx::section::SectionProperties;

/// Document-wide default typeface. Covers both Thai and Latin script.
pub const DEFAULT_FONT: &str = "TH Sarabun New";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
    r#"</Types>"#,
);

const PACKAGE_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#,
);

const DOCUMENT_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    r#"</Relationships>"#,
);

/// Pack composed blocks into `.docx` bytes with the memo page setup.
pub fn pack(blocks: &[StyledBlock]) -> Result<Vec<u8>> {
    let document = document_xml(blocks, &SectionProperties::memo())?;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, content) in [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", PACKAGE_RELS_XML),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
        ("word/document.xml", document.as_str()),
    ] {
        writer.start_file(name, options)?;
        writer.write_all(content.as_bytes())?;
    }
    writer.start_file("word/styles.xml", options)?;
    writer.write_all(styles_xml().as_bytes())?;

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Generate the main document part from the block sequence.
fn document_xml(blocks: &[StyledBlock], section: &SectionProperties) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );
    xml.push_str("<w:body>");
    for block in blocks {
        block_to_xml(block, &mut xml)?;
    }
    // The sectPr must be the last element in the body.
    section.to_xml(&mut xml)?;
    xml.push_str("</w:body>");
    xml.push_str("</w:document>");
    Ok(xml)
}

/// Generate the stylesheet part: document defaults carrying the Thai
/// typeface for ascii, high-ANSI, and complex-script runs.
fn styles_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            r#"<w:docDefaults><w:rPrDefault><w:rPr>"#,
            r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/>"#,
            r#"<w:sz w:val="32"/><w:szCs w:val="32"/>"#,
            r#"<w:lang w:val="th-TH" w:bidi="th-TH"/>"#,
            r#"</w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>"#,
            r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#,
            r#"<w:name w:val="Normal"/></w:style>"#,
            r#"</w:styles>"#,
        ),
        font = DEFAULT_FONT
    )
}
