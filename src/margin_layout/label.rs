//! Continuation label composition
//!
//! A reading spanning several chapters is labeled with continuation markers on
//! the side(s) where its full range runs past the displayed chapter.

use crate::models::ChapterSpan;
use serde::{Deserialize, Serialize};

pub const CONTINUATION_MARKER: &str = "(cont...)";

/// Where a reading continues beyond the displayed chapter
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Continuation {
    /// Entirely within one chapter
    Within,
    /// Starts here, continues into later chapters
    After,
    /// Started in an earlier chapter, ends here
    Before,
    /// Started earlier and continues later
    Both,
}

impl Continuation {
    /// Classify `chapter` against the reading's unclipped chapter span
    pub fn for_chapter(span: ChapterSpan, chapter: u32) -> Self {
        if span.is_single_chapter() {
            Continuation::Within
        } else if chapter == span.start {
            Continuation::After
        } else if chapter == span.end {
            Continuation::Before
        } else {
            Continuation::Both
        }
    }

    pub fn decorate(&self, name: &str, marker: &str) -> String {
        match self {
            Continuation::Within => name.to_string(),
            Continuation::After => format!("{} {}", name, marker),
            Continuation::Before => format!("{} {}", marker, name),
            Continuation::Both => format!("{} {} {}", marker, name, marker),
        }
    }
}

/// Label for a reading viewed on `chapter`
pub fn compose_label(name: &str, span: ChapterSpan, chapter: u32, marker: &str) -> String {
    Continuation::for_chapter(span, chapter).decorate(name, marker)
}
