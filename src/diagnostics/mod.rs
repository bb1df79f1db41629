//! Diagnostics for reading annotation data and layout passes
//!
//! Two kinds of findings are reported, neither of which blocks rendering:
//! - `DiagnosticMark`: problems in the book's reading data (`analyze_readings`)
//! - `LayoutDiagnostic`: readings or segments a layout pass could not place

pub mod readings;

pub use readings::analyze_readings;

use serde::{Deserialize, Serialize};

use crate::models::AnnotationStream;

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A data problem at a specific reading (and optionally segment)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiagnosticMark {
    pub stream: AnnotationStream,
    /// Index into the stream's reading array
    pub reading_index: usize,
    /// Index into the reading's effective segments, when segment-specific
    pub segment_index: Option<usize>,
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "inverted_segment")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    pub fn new(
        stream: AnnotationStream,
        reading_index: usize,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stream,
            reading_index,
            segment_index: None,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Attach a segment index
    pub fn at_segment(mut self, segment_index: usize) -> Self {
        self.segment_index = Some(segment_index);
        self
    }
}

/// Collection of diagnostic marks for a book
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|mark| mark.severity == DiagnosticSeverity::Error)
            .count()
    }

    /// Marks of one kind
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DiagnosticMark> + 'a {
        self.marks.iter().filter(move |mark| mark.kind == kind)
    }
}

/// Why a layout pass skipped a reading or segment
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LayoutIssue {
    /// The reading needed page-boundary clipping but no verses were rendered
    NoRenderedVerses,
    /// The reading's overall span had no anchor at one end; nothing drawn
    UnresolvedSpan,
    /// One segment had no anchor at one end; other segments still drawn
    UnresolvedSegment,
}

/// A reading or segment skipped during one layout pass
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LayoutDiagnostic {
    pub stream: AnnotationStream,
    /// Index into the chapter's pruned reading list for the stream
    pub reading_index: usize,
    pub reading: String,
    pub issue: LayoutIssue,
    pub message: String,
}
