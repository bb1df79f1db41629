//! Reading data validation
//!
//! Scans a book's readings for malformed references and ordering problems.
//! Findings are advisory: layout already treats bad data as not applicable.

use crate::models::{AnnotationStream, BookAnnotations, Reading, VerseRef};
use crate::parse::parse_verse_ref;

use super::{DiagnosticMark, DiagnosticSeverity, Diagnostics};

/// Analyze both streams of a book's annotation data
///
/// Reports:
/// - `reading_without_segments`: no `segments` and no legacy `start`/`end`
/// - `unparseable_reference`: a segment boundary is not a verse reference
/// - `inverted_segment`: a segment starts after it ends
/// - `unordered_segments`: a segment starts before the previous one ends
pub fn analyze_readings(book: &BookAnnotations) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    for stream in [AnnotationStream::Lectionary, AnnotationStream::DivineOffice] {
        for (index, reading) in book.stream(stream).iter().enumerate() {
            analyze_reading(reading, stream, index, &mut diagnostics);
        }
    }

    diagnostics
}

fn analyze_reading(
    reading: &Reading,
    stream: AnnotationStream,
    reading_index: usize,
    diagnostics: &mut Diagnostics,
) {
    let segments = reading.segments();
    if segments.is_empty() {
        diagnostics.add(DiagnosticMark::new(
            stream,
            reading_index,
            DiagnosticSeverity::Warning,
            "reading_without_segments",
            format!("Reading '{}' has no verse range", reading.name),
        ));
        return;
    }

    let mut previous_end: Option<VerseRef> = None;

    for (segment_index, segment) in segments.iter().enumerate() {
        let (start, end) = match (parse_verse_ref(&segment.start), parse_verse_ref(&segment.end)) {
            (Ok(start), Ok(end)) => (start, end),
            (Err(e), _) | (_, Err(e)) => {
                diagnostics.add(
                    DiagnosticMark::new(
                        stream,
                        reading_index,
                        DiagnosticSeverity::Error,
                        "unparseable_reference",
                        format!("Reading '{}': {}", reading.name, e),
                    )
                    .at_segment(segment_index),
                );
                previous_end = None;
                continue;
            }
        };

        if start > end {
            diagnostics.add(
                DiagnosticMark::new(
                    stream,
                    reading_index,
                    DiagnosticSeverity::Error,
                    "inverted_segment",
                    format!("Reading '{}': segment {} starts after {}", reading.name, start, end),
                )
                .at_segment(segment_index),
            );
        }

        if let Some(previous) = previous_end {
            if start < previous {
                diagnostics.add(
                    DiagnosticMark::new(
                        stream,
                        reading_index,
                        DiagnosticSeverity::Warning,
                        "unordered_segments",
                        format!(
                            "Reading '{}': segment starting {} begins before previous segment ends at {}",
                            reading.name, start, previous
                        ),
                    )
                    .at_segment(segment_index),
                );
            }
        }

        previous_end = Some(end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    fn book(lectionary: Vec<Reading>, divine_office: Vec<Reading>) -> BookAnnotations {
        BookAnnotations {
            lectionary_readings: lectionary,
            divine_office,
        }
    }

    #[test]
    fn test_clean_data_has_no_marks() {
        let data = book(
            vec![Reading::new("Gospel", "red", vec![
                Segment::new("3:1", "3:4a"),
                Segment::new("3:6", "4:2"),
            ])],
            vec![Reading::single("Office", "blue", "2:1", "2:9")],
        );
        assert!(analyze_readings(&data).is_empty());
    }

    #[test]
    fn test_missing_range() {
        let data = book(vec![], vec![Reading {
            name: "Orphan".to_string(),
            ..Default::default()
        }]);

        let diagnostics = analyze_readings(&data);
        assert_eq!(diagnostics.marks.len(), 1);
        let mark = &diagnostics.marks[0];
        assert_eq!(mark.kind, "reading_without_segments");
        assert_eq!(mark.stream, AnnotationStream::DivineOffice);
        assert_eq!(mark.severity, DiagnosticSeverity::Warning);
    }

    #[test]
    fn test_unparseable_and_inverted() {
        let data = book(
            vec![Reading::new("Bad", "red", vec![
                Segment::new("3:x", "3:4"),
                Segment::new("3:9", "3:6"),
            ])],
            vec![],
        );

        let diagnostics = analyze_readings(&data);
        assert_eq!(diagnostics.error_count(), 2);
        assert_eq!(diagnostics.of_kind("unparseable_reference").next().unwrap().segment_index, Some(0));
        assert_eq!(diagnostics.of_kind("inverted_segment").next().unwrap().segment_index, Some(1));
    }

    #[test]
    fn test_unordered_segments() {
        let data = book(
            vec![Reading::new("Shuffled", "red", vec![
                Segment::new("3:10", "3:12"),
                Segment::new("3:2", "3:4"),
            ])],
            vec![],
        );

        let diagnostics = analyze_readings(&data);
        assert_eq!(diagnostics.of_kind("unordered_segments").count(), 1);
        assert_eq!(diagnostics.error_count(), 0);
    }
}
