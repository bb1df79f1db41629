//! Segment clipping against the displayed chapter
//!
//! Segments that start in an earlier chapter are drawn from the first verse
//! rendered on the page; segments that end in a later chapter are drawn to the
//! last verse rendered on the page. Segments not touching the chapter are
//! dropped.

use crate::models::Segment;
use thiserror::Error;

/// First and last whole-verse anchors rendered for the displayed chapter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBounds<'a> {
    pub first: &'a str,
    pub last: &'a str,
}

impl<'a> PageBounds<'a> {
    /// Bounds from the ordered list of rendered verse identifiers
    pub fn from_rendered(verses: &'a [String]) -> Option<Self> {
        Some(Self {
            first: verses.first()?.as_str(),
            last: verses.last()?.as_str(),
        })
    }
}

/// A segment range restricted to the displayed chapter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClippedSegment<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ClipError {
    /// A segment crosses the chapter boundary but the page rendered no verses
    #[error("No verses rendered for chapter {0}; cannot clip to page boundaries")]
    NoRenderedVerses(u32),
}

/// Clip a reading's segments to `chapter`
///
/// Returns the segments that touch the chapter, in order, with out-of-chapter
/// boundaries replaced by the page bounds. An empty result means the reading
/// draws nothing on this page. Segments with malformed boundaries are skipped.
///
/// # Errors
/// `ClipError::NoRenderedVerses` when a segment needs page-boundary
/// substitution and `page` is None; the whole reading is then skipped.
pub fn clip_segments<'a>(
    segments: &'a [Segment],
    chapter: u32,
    page: Option<PageBounds<'a>>,
) -> Result<Vec<ClippedSegment<'a>>, ClipError> {
    let mut clipped = Vec::with_capacity(segments.len());

    for segment in segments {
        let span = match segment.chapter_span() {
            Some(span) if span.contains(chapter) => span,
            _ => continue,
        };

        let start = if span.start < chapter {
            page.ok_or(ClipError::NoRenderedVerses(chapter))?.first
        } else {
            segment.start.as_str()
        };

        let end = if span.end > chapter {
            page.ok_or(ClipError::NoRenderedVerses(chapter))?.last
        } else {
            segment.end.as_str()
        };

        clipped.push(ClippedSegment { start, end });
    }

    Ok(clipped)
}
