//! Single-page PDF assembly.
//!
//! Emits the five objects a one-page image document needs (catalog, page
//! tree, page, image XObject, content stream) with a correct cross-reference
//! table. The JPEG payload passes through untouched under `/DCTDecode`, and
//! the content stream stretches it to exactly fill the page bounds; there is
//! no pagination and no aspect-ratio correction beyond what the captured
//! region already matches.

use std::fmt::Write as FmtWrite;

use crate::common::error::Result;
use crate::pdf::page::PageImage;

/// Render a captured page image as PDF bytes.
pub fn render(page: &PageImage) -> Result<Vec<u8>> {
    let width_pt = page.geometry.width_pt();
    let height_pt = page.geometry.height_pt();
    let content = format!("q\n{width_pt:.2} 0 0 {height_pt:.2} 0 0 cm\n/Im0 Do\nQ\n");

    let mut out: Vec<u8> = Vec::with_capacity(page.jpeg.len() + 1024);
    // Header plus a high-byte comment line so transports treat the file as
    // binary.
    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut offsets = [0usize; 5];

    offsets[0] = out.len();
    out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    offsets[1] = out.len();
    out.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");

    offsets[2] = out.len();
    let page_obj = format!(
        "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {width_pt:.2} {height_pt:.2}] \
         /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R >>\nendobj\n"
    );
    out.extend_from_slice(page_obj.as_bytes());

    offsets[3] = out.len();
    let image_dict = format!(
        "4 0 obj\n<< /Type /XObject /Subtype /Image /Width {} /Height {} \
         /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>\nstream\n",
        page.width_px,
        page.height_px,
        page.jpeg.len()
    );
    out.extend_from_slice(image_dict.as_bytes());
    out.extend_from_slice(&page.jpeg);
    out.extend_from_slice(b"\nendstream\nendobj\n");

    offsets[4] = out.len();
    let content_obj = format!(
        "5 0 obj\n<< /Length {} >>\nstream\n{}endstream\nendobj\n",
        content.len(),
        content
    );
    out.extend_from_slice(content_obj.as_bytes());

    let xref_offset = out.len();
    let mut tail = String::with_capacity(256);
    tail.push_str("xref\n0 6\n0000000000 65535 f \n");
    for offset in offsets {
        writeln!(tail, "{offset:010} 00000 n ")?;
    }
    tail.push_str("trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n");
    writeln!(tail, "{xref_offset}")?;
    tail.push_str("%%EOF\n");
    out.extend_from_slice(tail.as_bytes());

    Ok(out)
}
