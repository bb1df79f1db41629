// End-to-end margin layout: data file JSON -> chapter pruning -> display list

use liturgy_margins_wasm::api::MarginAnnotator;
use liturgy_margins_wasm::margin_layout::{AnchorMeasurement, LayoutConfig, LayoutEngine, PageAnchors};
use liturgy_margins_wasm::models::{BookAnnotations, Reading};
use liturgy_margins_wasm::AnnotationError;

const BOOK_JSON: &str = r##"{
    "lectionaryReadings": [
        {"name": "Gospel", "color": "#b22222", "start": "3:5", "end": "3:9"},
        {"name": "Easter Vigil", "color": "#daa520", "start": "2:40", "end": "3:10"},
        {"name": "Passion", "color": "#800080", "start": "1:1", "end": "5:9"},
        {"name": "Epiphany", "color": "#4682b4", "start": "7:1", "end": "7:12"}
    ],
    "divineOffice": [
        {"name": "Office of Readings", "color": "#2e8b57",
         "segments": [{"start": "3:1", "end": "3:3a"}, {"start": "3:6", "end": "4:2"}]},
        {"name": "Missing", "color": "#000"}
    ]
}"##;

/// Chapter 3 rendered with 20 verses, 30px each, container at y=200
fn chapter_three_anchors() -> PageAnchors {
    PageAnchors {
        container_top: 200.0,
        verses: (1..=20)
            .map(|v| AnchorMeasurement::new(format!("3:{}", v), 200.0 + (v - 1) as f32 * 30.0, 30.0))
            .collect(),
        verse_parts: vec![
            AnchorMeasurement::new("3:3a", 260.0, 12.0),
            AnchorMeasurement::new("3:3b", 272.0, 18.0),
        ],
    }
}

fn annotator() -> MarginAnnotator {
    let book = BookAnnotations::from_json_str(BOOK_JSON).expect("fixture should parse");
    MarginAnnotator::from_book(&book, 3)
}

#[test]
fn test_relevance_prunes_at_load() {
    let annotator = annotator();
    let names: Vec<&str> = annotator
        .annotations()
        .lectionary
        .iter()
        .map(|r| r.name.as_str())
        .collect();

    assert_eq!(names, vec!["Gospel", "Easter Vigil", "Passion"]);
    assert_eq!(annotator.annotations().divine_office.len(), 1);
    assert_eq!(annotator.annotations().reading_count(), 4);
}

#[test]
fn test_lectionary_margin_lanes_and_labels() {
    let layout = annotator().compute(&chapter_three_anchors(), &LayoutConfig::default());
    let bars = &layout.left.bars;

    assert_eq!(bars.len(), 3);

    // Gospel 3:5..3:9 -> [120, 270)
    assert_eq!((bars[0].top, bars[0].height, bars[0].lane), (120.0, 150.0, 0));
    assert_eq!(bars[0].label.as_deref(), Some("Gospel"));

    // Vigil clipped to 3:1..3:10 -> [0, 300), overlaps Gospel
    assert_eq!((bars[1].top, bars[1].height, bars[1].lane), (0.0, 300.0, 1));
    assert_eq!(bars[1].side_offset, 35.0);
    assert_eq!(bars[1].label.as_deref(), Some("(cont...) Easter Vigil"));

    // Passion clipped to the whole page, overlaps both
    assert_eq!((bars[2].top, bars[2].height, bars[2].lane), (0.0, 600.0, 2));
    assert_eq!(bars[2].side_offset, 60.0);
    assert_eq!(bars[2].label.as_deref(), Some("(cont...) Passion (cont...)"));

    assert_eq!(layout.left.lane_count, 3);
    assert_eq!(layout.left.offset_property, "right");
}

#[test]
fn test_divine_office_multi_segment_reading() {
    let layout = annotator().compute(&chapter_three_anchors(), &LayoutConfig::default());
    let bars = &layout.right.bars;

    assert_eq!(bars.len(), 2);
    // 3:1..3:3a ends at the bottom of the 3:3a part anchor
    assert_eq!((bars[0].top, bars[0].height), (0.0, 72.0));
    // 3:6..4:2 clipped to the last page verse 3:20
    assert_eq!((bars[1].top, bars[1].height), (150.0, 450.0));
    assert_eq!(bars[0].label.as_deref(), Some("Office of Readings (cont...)"));
    assert_eq!(bars[1].label, None);
    assert!(bars.iter().all(|bar| bar.lane == 0 && bar.color == "#2e8b57"));
}

#[test]
fn test_redraw_is_idempotent() {
    let annotator = annotator();
    let anchors = chapter_three_anchors();
    let config = LayoutConfig::default();

    let first = annotator.compute(&anchors, &config);
    let second = annotator.compute(&anchors, &config);
    assert_eq!(first, second);
}

#[test]
fn test_relayout_after_anchors_move() {
    let annotator = annotator();
    let before = annotator.compute(&chapter_three_anchors(), &LayoutConfig::default());

    // Narrower viewport: every verse wraps to twice the height
    let mut resized = chapter_three_anchors();
    for (i, anchor) in resized.verses.iter_mut().enumerate() {
        anchor.top = 200.0 + i as f32 * 60.0;
        anchor.height = 60.0;
    }
    resized.verse_parts.clear();

    let after = annotator.compute(&resized, &LayoutConfig::default());
    assert_eq!(before.left.bars.len(), after.left.bars.len());
    assert_eq!(after.left.bars[0].top, 240.0);
    assert_eq!(after.left.bars[0].height, 300.0);
    // Without part anchors the 3:3a segment is skipped; the label moves on
    assert_eq!(after.right.bars.len(), 1);
    assert_eq!(after.right.bars[0].top, 300.0);
    assert_eq!(after.right.bars[0].label.as_deref(), Some("Office of Readings (cont...)"));
    assert_eq!(after.diagnostics.len(), 1);
}

#[test]
fn test_unresolvable_reading_does_not_block_others() {
    let book = BookAnnotations {
        lectionary_readings: vec![
            Reading::single("Ghost", "gray", "3:30", "3:40"),
            Reading::single("Gospel", "red", "3:1", "3:2"),
        ],
        divine_office: vec![],
    };
    let chapter = book.for_chapter(3);
    let layout = LayoutEngine::new().compute_layout(&chapter, &chapter_three_anchors(), &LayoutConfig::default());

    assert_eq!(layout.left.bars.len(), 1);
    assert_eq!(layout.left.bars[0].label.as_deref(), Some("Gospel"));
    // The ghost never took a lane
    assert_eq!(layout.left.bars[0].lane, 0);
    assert_eq!(layout.diagnostics.len(), 1);
    assert_eq!(layout.diagnostics[0].reading, "Ghost");
}

#[test]
fn test_for_book_rejects_missing_chapter() {
    let result = MarginAnnotator::try_for_book("ruth", BOOK_JSON, 5);
    assert!(matches!(
        result,
        Err(AnnotationError::ChapterOutOfRange { chapter: 5, max: 4, .. })
    ));

    let ok = MarginAnnotator::try_for_book("ruth", BOOK_JSON, 3).expect("Ruth has chapter 3");
    assert_eq!(ok.annotations().chapter, 3);

    // Unknown slugs skip the range check
    assert!(MarginAnnotator::try_for_book("custom-book", BOOK_JSON, 99).is_ok());
}

#[test]
fn test_for_book_rejects_bad_json() {
    let result = MarginAnnotator::try_for_book("ruth", "not json", 1);
    assert!(matches!(result, Err(AnnotationError::InvalidData(_))));
}

#[test]
fn test_display_list_serializes_for_javascript() {
    let layout = annotator().compute(&chapter_three_anchors(), &LayoutConfig::default());
    let json = serde_json::to_value(&layout).expect("display list serializes");

    assert_eq!(json["chapter"], 3);
    assert_eq!(json["left"]["side"], "left");
    assert_eq!(json["left"]["bar_class"], "annotation-bar-left");
    assert_eq!(json["right"]["stream"], "divine_office");
    assert_eq!(json["left"]["bars"][0]["side_offset"], 10.0);
    assert!(json["right"]["bars"][1]["label"].is_null());
}
