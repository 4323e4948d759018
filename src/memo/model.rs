//! The semantic memo record.
//!
//! `Memo` holds every field of the memorandum independent of output format.
//! It is pure data: the synthesis pipeline never mutates it, and exports read
//! an owned snapshot taken at trigger time, so edits made while an export is
//! in flight are not visible to that export.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Character cap applied to each multi-line body field by the data-entry
/// surface. The synthesis core itself accepts any length; this constant exists
/// so hosts enforce a consistent limit.
pub const MAX_BODY_CHARS: usize = 600;

/// All fields of a memorandum.
///
/// Every text field defaults to the empty string; only [`Memo::date`] is
/// optional and defaults to absent. No field is ever null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Memo {
    /// ส่วนราชการ - the issuing department or agency
    pub department: String,
    /// ที่ - the reference number of the memo
    pub reference_number: String,
    /// วันที่ - the memo date; rendered through [`crate::memo::date::format`]
    pub date: Option<NaiveDate>,
    /// เรื่อง - the subject line
    pub subject: String,
    /// เรียน - the addressee
    pub salutation: String,
    /// อ้างถึง - referenced prior correspondence
    pub reference_to: String,
    /// สิ่งที่ส่งมาด้วย - attachments
    pub attachments: String,
    /// Body part 1: background / reason. May contain embedded line breaks.
    pub reason: String,
    /// Body part 2: objective. May contain embedded line breaks.
    pub objective: String,
    /// Body part 3: conclusion. May contain embedded line breaks.
    pub conclusion: String,
    /// Honorific placed before the signer's name inside the parentheses
    pub signer_prefix: String,
    /// Name of the signer
    pub signer_name: String,
    /// Position of the signer
    pub signer_position: String,
}

impl Memo {
    /// Create a memo with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field to its documented default, including `date`
    /// becoming absent. Always succeeds.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Owned copy of the current field values, read once at export trigger
    /// time. The copy is what an export renders; later edits do not reach it.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}
