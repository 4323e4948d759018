//! The styled block model produced by the memo layout.
//!
//! Blocks are paragraph-level records; each carries one or more runs of
//! styled text. Run sizes are half-points (stored size = 2 × intended point
//! size); paragraph metrics are twips. Blocks are built fresh per export and
//! discarded after serialization.

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockAlignment {
    #[default]
    Left,
    Center,
}

impl BlockAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// A contiguous span of identically styled text within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Text content of the run
    pub text: String,
    /// Bold flag
    pub bold: bool,
    /// Font size in half-points (e.g. 40 = 20pt)
    pub size_half_points: u32,
    /// Whether a tab stop precedes this run's text
    pub tab_before: bool,
}

impl StyledRun {
    /// Create a plain run at the given half-point size.
    pub fn new(text: impl Into<String>, size_half_points: u32) -> Self {
        Self {
            text: text.into(),
            bold: false,
            size_half_points,
            tab_before: false,
        }
    }

    /// Mark the run bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Precede the run's text with a tab stop.
    pub fn after_tab(mut self) -> Self {
        self.tab_before = true;
        self
    }
}

/// One paragraph-level block of the composed document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledBlock {
    /// Runs in document order
    pub runs: Vec<StyledRun>,
    /// Paragraph alignment
    pub alignment: BlockAlignment,
    /// First-line indent in twips, applied per declared line (never to
    /// visually wrapped continuations)
    pub first_line_indent_twips: Option<u32>,
    /// Left indent of the whole paragraph in twips
    pub indent_left_twips: Option<u32>,
    /// Extra space after the paragraph in twips
    pub spacing_after_twips: Option<u32>,
}

impl StyledBlock {
    /// Block holding a single run.
    pub fn paragraph(run: StyledRun) -> Self {
        Self {
            runs: vec![run],
            ..Self::default()
        }
    }

    /// Block holding several runs on one logical row.
    pub fn row(runs: Vec<StyledRun>) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    pub fn centered(mut self) -> Self {
        self.alignment = BlockAlignment::Center;
        self
    }

    pub fn first_line_indent(mut self, twips: u32) -> Self {
        self.first_line_indent_twips = Some(twips);
        self
    }

    pub fn indent_left(mut self, twips: u32) -> Self {
        self.indent_left_twips = Some(twips);
        self
    }

    pub fn spacing_after(mut self, twips: u32) -> Self {
        self.spacing_after_twips = Some(twips);
        self
    }

    /// Concatenated text of all runs, ignoring styling and tabs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}
