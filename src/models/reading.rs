//! Reading annotation data
//!
//! Mirrors the per-book data file: two ordered arrays of readings, one for
//! the Lectionary for Mass and one for the Divine Office. Readings are loaded
//! once per page view and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::verse::ChapterSpan;
use crate::margin_layout::relevance;
use crate::parse::chapter_of;
use crate::AnnotationError;

/// One contiguous printed range of a reading
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// First verse identifier, e.g. "3:5" or "3:5b"
    pub start: String,

    /// Last verse identifier (inclusive)
    pub end: String,
}

impl Segment {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Chapters covered by this segment, or None if either boundary is malformed
    pub fn chapter_span(&self) -> Option<ChapterSpan> {
        Some(ChapterSpan::new(chapter_of(&self.start)?, chapter_of(&self.end)?))
    }
}

/// A named, colored annotation over one or more segments
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Reading {
    #[serde(default)]
    pub name: String,

    /// CSS color for the bar border and label
    #[serde(default)]
    pub color: String,

    /// Discontiguous printed ranges, earliest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,

    /// Legacy single-range start, used when `segments` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Legacy single-range end, used when `segments` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl Reading {
    /// Reading with explicit segments
    pub fn new(name: impl Into<String>, color: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            segments: Some(segments),
            start: None,
            end: None,
        }
    }

    /// Reading in the legacy single-range form
    pub fn single(
        name: impl Into<String>,
        color: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            segments: None,
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Effective segment list
    ///
    /// Explicit `segments` win; otherwise the legacy `start`/`end` pair forms a
    /// single segment. A reading with neither has no segments.
    pub fn segments(&self) -> Cow<'_, [Segment]> {
        match (&self.segments, &self.start, &self.end) {
            (Some(segments), _, _) => Cow::Borrowed(segments.as_slice()),
            (None, Some(start), Some(end)) => Cow::Owned(vec![Segment::new(start.clone(), end.clone())]),
            _ => Cow::Borrowed(&[]),
        }
    }

    /// Chapters spanned by the whole reading: first segment's start chapter to
    /// last segment's end chapter
    ///
    /// None when the reading has no segments or either boundary is malformed.
    pub fn chapter_span(&self) -> Option<ChapterSpan> {
        let segments = self.segments();
        let first = segments.first()?;
        let last = segments.last()?;
        Some(ChapterSpan::new(chapter_of(&first.start)?, chapter_of(&last.end)?))
    }
}

/// Which annotation category a reading belongs to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationStream {
    Lectionary,
    DivineOffice,
}

impl AnnotationStream {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationStream::Lectionary => "lectionary",
            AnnotationStream::DivineOffice => "divine_office",
        }
    }
}

/// All annotation data for one book, as stored in `data/{book}.json`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookAnnotations {
    #[serde(default)]
    pub lectionary_readings: Vec<Reading>,

    #[serde(default)]
    pub divine_office: Vec<Reading>,
}

impl BookAnnotations {
    /// Parse a book's annotation data file
    pub fn from_json_str(json: &str) -> Result<Self, AnnotationError> {
        serde_json::from_str(json).map_err(|e| AnnotationError::InvalidData(e.to_string()))
    }

    /// Readings of one stream, in data order
    pub fn stream(&self, stream: AnnotationStream) -> &[Reading] {
        match stream {
            AnnotationStream::Lectionary => &self.lectionary_readings,
            AnnotationStream::DivineOffice => &self.divine_office,
        }
    }

    /// Prune both streams to the readings that touch `chapter`
    ///
    /// Runs once after data load; per-render work only sees the result.
    pub fn for_chapter(&self, chapter: u32) -> ChapterAnnotations {
        ChapterAnnotations {
            chapter,
            lectionary: relevance::filter_for_chapter(&self.lectionary_readings, chapter),
            divine_office: relevance::filter_for_chapter(&self.divine_office, chapter),
        }
    }
}

/// Readings relevant to one displayed chapter
///
/// Immutable for the lifetime of the page; every redraw lays out from it afresh.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ChapterAnnotations {
    pub chapter: u32,
    pub lectionary: Vec<Reading>,
    pub divine_office: Vec<Reading>,
}

impl ChapterAnnotations {
    pub fn stream(&self, stream: AnnotationStream) -> &[Reading] {
        match stream {
            AnnotationStream::Lectionary => &self.lectionary,
            AnnotationStream::DivineOffice => &self.divine_office,
        }
    }

    pub fn reading_count(&self) -> usize {
        self.lectionary.len() + self.divine_office.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_fields_form_single_segment() {
        let reading = Reading::single("Gospel", "#c00", "3:5", "3:9");
        assert_eq!(reading.segments().as_ref(), &[Segment::new("3:5", "3:9")]);
    }

    #[test]
    fn test_explicit_segments_win_over_legacy() {
        let mut reading = Reading::new("First Reading", "green", vec![
            Segment::new("2:1", "2:4a"),
            Segment::new("2:6", "2:9"),
        ]);
        reading.start = Some("1:1".to_string());
        reading.end = Some("1:2".to_string());

        assert_eq!(reading.segments().len(), 2);
        assert_eq!(reading.chapter_span(), Some(ChapterSpan::new(2, 2)));
    }

    #[test]
    fn test_missing_range_has_no_segments() {
        let reading = Reading {
            name: "Orphan".to_string(),
            start: Some("1:1".to_string()),
            ..Default::default()
        };
        assert!(reading.segments().is_empty());
        assert_eq!(reading.chapter_span(), None);
    }

    #[test]
    fn test_chapter_span_uses_first_and_last_segment() {
        let reading = Reading::new("Vigil", "blue", vec![
            Segment::new("2:40", "3:2"),
            Segment::new("3:5", "4:10"),
        ]);
        assert_eq!(reading.chapter_span(), Some(ChapterSpan::new(2, 4)));
    }

    #[test]
    fn test_book_annotations_from_json() {
        let json = r##"{
            "lectionaryReadings": [
                {"name": "Gospel", "color": "#a00", "start": "3:5", "end": "3:9"},
                {"name": "Acclamation", "color": "#0a0",
                 "segments": [{"start": "3:1", "end": "3:2"}, {"start": "3:4a", "end": "3:4b"}],
                 "lectionaryId": 42}
            ]
        }"##;

        let book = BookAnnotations::from_json_str(json).unwrap();
        assert_eq!(book.lectionary_readings.len(), 2);
        assert!(book.divine_office.is_empty());
        assert_eq!(book.lectionary_readings[1].segments().len(), 2);
    }

    #[test]
    fn test_book_annotations_invalid_json() {
        let result = BookAnnotations::from_json_str("{\"lectionaryReadings\": 5}");
        assert!(matches!(result, Err(AnnotationError::InvalidData(_))));
    }

    #[test]
    fn test_for_chapter_preserves_data_order() {
        let book = BookAnnotations {
            lectionary_readings: vec![
                Reading::single("A", "red", "3:1", "3:4"),
                Reading::single("B", "red", "1:1", "1:9"),
                Reading::single("C", "red", "2:20", "4:2"),
            ],
            divine_office: vec![Reading::single("D", "blue", "3:10", "3:12")],
        };

        let chapter = book.for_chapter(3);
        let names: Vec<&str> = chapter.lectionary.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(chapter.divine_office.len(), 1);
        assert_eq!(chapter.reading_count(), 3);
    }
}
