//! Chapter relevance filter
//!
//! A reading is relevant to chapter `C` when `C` lies between the chapter of
//! its first segment's start and the chapter of its last segment's end. Gaps
//! between segments are not considered here; the clipper handles those.

use crate::models::Reading;

/// Whether `reading` touches `chapter`
///
/// Readings without segments or with a malformed boundary are never relevant.
pub fn is_relevant(reading: &Reading, chapter: u32) -> bool {
    reading
        .chapter_span()
        .map_or(false, |span| span.contains(chapter))
}

/// Relevant readings in their original data order
pub fn filter_for_chapter(readings: &[Reading], chapter: u32) -> Vec<Reading> {
    readings
        .iter()
        .filter(|reading| is_relevant(reading, chapter))
        .cloned()
        .collect()
}
