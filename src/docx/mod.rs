//! Structured export: WordprocessingML synthesis.
//!
//! The pipeline is split in two layers. [`builder`] maps a memo into an
//! ordered sequence of [`block::StyledBlock`]s, a format-neutral tree of
//! styled text that never fails to build. [`package`] then serializes the
//! blocks into a complete `.docx` archive; only this second step can fail.

pub mod block;
pub mod builder;
pub mod package;
pub(crate) mod paragraph;
pub mod section;

pub use block::{BlockAlignment, StyledBlock, StyledRun};
pub use builder::compose;
pub use section::SectionProperties;
