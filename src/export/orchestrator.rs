//! Sequencing of user-triggered exports.
//!
//! Each export kind runs as a state machine `Idle -> Running -> terminal ->
//! Idle`. Re-triggering a kind while it is running is reported as a conflict
//! and skipped, never queued and never run concurrently. Failures are caught
//! here, translated into one user-facing notification each, and the memo
//! snapshot is left untouched so the user can retry without re-entering data.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::common::error::{Error, Result};
use crate::docx;
use crate::export::hooks::{ByteSink, ChromeControl, NoticeKind, Notifier, RegionSource};
use crate::export::raster::RasterExporter;
use crate::memo::Memo;

/// Fixed, content-independent output file name, derived from the document
/// title.
pub const DOCX_FILE_NAME: &str = "บันทึกข้อความ.docx";

/// Terminal state of one export invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    /// An export of the same kind was already running; nothing was started.
    Skipped,
}

/// One-slot occupancy gate per export kind.
struct Gate {
    running: AtomicBool,
    label: &'static str,
}

impl Gate {
    const fn new(label: &'static str) -> Self {
        Self {
            running: AtomicBool::new(false),
            label,
        }
    }

    fn try_acquire(&self) -> Result<GatePass<'_>> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Ok(GatePass(self))
        } else {
            Err(Error::Busy(self.label))
        }
    }
}

/// Releases the gate on drop, so the machine returns to Idle on every path.
struct GatePass<'a>(&'a Gate);

impl Drop for GatePass<'_> {
    fn drop(&mut self) {
        self.0.running.store(false, Ordering::SeqCst);
    }
}

/// Drives the two export pipelines from user actions.
///
/// The orchestrator never mutates the memo it exports; it renders the owned
/// snapshot handed to it.
pub struct ExportOrchestrator {
    raster: RasterExporter,
    sink: Arc<dyn ByteSink>,
    notifier: Arc<dyn Notifier>,
    pdf_gate: Gate,
    docx_gate: Gate,
}

impl ExportOrchestrator {
    pub fn new(
        region: Arc<dyn RegionSource>,
        chrome: Arc<dyn ChromeControl>,
        sink: Arc<dyn ByteSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            raster: RasterExporter::new(region, chrome, sink.clone()),
            sink,
            notifier,
            pdf_gate: Gate::new("PDF"),
            docx_gate: Gate::new("Word"),
        }
    }

    /// Run the raster export and notify its terminal state.
    pub async fn export_pdf(&self) -> Outcome {
        let _pass = match self.pdf_gate.try_acquire() {
            Ok(pass) => pass,
            Err(err) => return self.skip(err),
        };

        self.notifier.notify(
            NoticeKind::Info,
            "เตรียมสร้าง PDF",
            "กำลังแปลงเอกสารเป็นไฟล์ PDF",
        );
        match self.raster.export().await {
            Ok(()) => {
                self.notifier.notify(
                    NoticeKind::Success,
                    "สร้าง PDF สำเร็จ",
                    "บันทึกไฟล์ บันทึกข้อความ.pdf แล้ว",
                );
                Outcome::Succeeded
            }
            Err(err) => {
                log::warn!("raster export failed: {err}");
                self.notifier
                    .notify(NoticeKind::Error, "สร้าง PDF ไม่สำเร็จ", &err.to_string());
                Outcome::Failed
            }
        }
    }

    /// Run the structured export for a memo snapshot and notify its terminal
    /// state.
    pub async fn export_docx(&self, memo: Memo) -> Outcome {
        let _pass = match self.docx_gate.try_acquire() {
            Ok(pass) => pass,
            Err(err) => return self.skip(err),
        };

        self.notifier.notify(
            NoticeKind::Info,
            "เตรียมสร้างไฟล์ Word",
            "กำลังสร้างไฟล์ บันทึกข้อความ.docx",
        );
        match self.pack_and_save(&memo).await {
            Ok(()) => {
                self.notifier.notify(
                    NoticeKind::Success,
                    "สร้างไฟล์ Word สำเร็จ",
                    "บันทึกไฟล์ บันทึกข้อความ.docx แล้ว",
                );
                Outcome::Succeeded
            }
            Err(err) => {
                log::warn!("structured export failed: {err}");
                self.notifier.notify(
                    NoticeKind::Error,
                    "สร้างไฟล์ Word ไม่สำเร็จ",
                    &err.to_string(),
                );
                Outcome::Failed
            }
        }
    }

    /// Run both exports for one memo snapshot: Word first, then PDF,
    /// sequenced strictly on completion of the structured export rather than
    /// on a wall-clock delay. The PDF export starts even when the structured
    /// export failed, so either file can still be retried independently.
    pub async fn export_combined(&self, memo: Memo) -> (Outcome, Outcome) {
        let docx = self.export_docx(memo).await;
        let pdf = self.export_pdf().await;
        (docx, pdf)
    }

    /// Reset the memo to its defaults and notify. Pure and synchronous.
    pub fn clear(&self, memo: &mut Memo) {
        memo.clear();
        self.notifier.notify(
            NoticeKind::Info,
            "ล้างข้อมูล",
            "ข้อมูลในฟอร์มทั้งหมดถูกล้างแล้ว",
        );
    }

    async fn pack_and_save(&self, memo: &Memo) -> Result<()> {
        let blocks = docx::builder::compose(memo);
        let bytes = docx::package::pack(&blocks)?;
        log::debug!("packed {} DOCX bytes", bytes.len());
        self.sink.save(&bytes, DOCX_FILE_NAME).await
    }

    fn skip(&self, err: Error) -> Outcome {
        log::debug!("export skipped: {err}");
        self.notifier
            .notify(NoticeKind::Error, "กำลังดำเนินการอยู่", &err.to_string());
        Outcome::Skipped
    }
}
