//! Geometry positioning from rendered text anchors
//!
//! Verse anchors are measured by the page (or by `api::dom`) and exposed
//! through `AnchorProvider`. Sub-verse part anchors (`data-verse-part="3:5a"`)
//! are preferred over whole-verse anchors (`data-verse="3:5"`).

use serde::{Deserialize, Serialize};

/// Vertical box of a rendered anchor, relative to the text container's origin
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AnchorBox {
    pub top: f32,
    pub height: f32,
}

impl AnchorBox {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Source of anchor measurements for the currently displayed text
pub trait AnchorProvider {
    /// Anchor for an exact sub-verse part identifier ("3:5a"), if rendered
    fn verse_part(&self, id: &str) -> Option<AnchorBox>;

    /// Anchor for a whole-verse identifier ("3:5"), if rendered
    fn verse(&self, id: &str) -> Option<AnchorBox>;

    /// Whole-verse identifiers rendered for `chapter`, in display order
    fn rendered_verses(&self, chapter: u32) -> Vec<String>;
}

/// Half-open vertical pixel interval `[start, end)`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PixelSpan {
    pub start: f32,
    pub end: f32,
}

impl PixelSpan {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn height(&self) -> f32 {
        self.end - self.start
    }

    /// Strict overlap; spans that only touch do not overlap
    pub fn overlaps(&self, other: &PixelSpan) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Resolves verse identifiers to pixel offsets
pub struct GeometryPositioner<'p, P: AnchorProvider + ?Sized> {
    provider: &'p P,
}

impl<'p, P: AnchorProvider + ?Sized> GeometryPositioner<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// Anchor for `id`, trying the sub-verse part anchor first
    pub fn find(&self, id: &str) -> Option<AnchorBox> {
        self.provider
            .verse_part(id)
            .or_else(|| self.provider.verse(id))
    }

    /// Top offset of the anchor where a range starts
    pub fn start_offset(&self, id: &str) -> Option<f32> {
        self.find(id).map(|anchor| anchor.top)
    }

    /// Bottom offset of the anchor where a range ends
    pub fn end_offset(&self, id: &str) -> Option<f32> {
        self.find(id).map(|anchor| anchor.bottom())
    }

    /// Pixel span from the top of `start` to the bottom of `end`
    pub fn span(&self, start: &str, end: &str) -> Option<PixelSpan> {
        Some(PixelSpan::new(self.start_offset(start)?, self.end_offset(end)?))
    }
}

/// One measured anchor as reported by JavaScript
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnchorMeasurement {
    /// Verse or verse-part identifier
    pub id: String,

    /// offsetTop in page coordinates
    pub top: f32,

    /// offsetHeight
    pub height: f32,
}

impl AnchorMeasurement {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Snapshot of all anchor measurements for the active translation
///
/// Taken by JavaScript after the chapter text has rendered. Lookups return the
/// first measurement with a matching id, mirroring `querySelector`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PageAnchors {
    /// offsetTop of the text container; subtracted from every anchor
    pub container_top: f32,

    /// Whole-verse anchors in display order
    pub verses: Vec<AnchorMeasurement>,

    /// Sub-verse part anchors
    pub verse_parts: Vec<AnchorMeasurement>,
}

impl PageAnchors {
    fn lookup(&self, anchors: &[AnchorMeasurement], id: &str) -> Option<AnchorBox> {
        anchors
            .iter()
            .find(|anchor| anchor.id == id)
            .map(|anchor| AnchorBox::new(anchor.top - self.container_top, anchor.height))
    }
}

impl AnchorProvider for PageAnchors {
    fn verse_part(&self, id: &str) -> Option<AnchorBox> {
        self.lookup(&self.verse_parts, id)
    }

    fn verse(&self, id: &str) -> Option<AnchorBox> {
        self.lookup(&self.verses, id)
    }

    fn rendered_verses(&self, chapter: u32) -> Vec<String> {
        let prefix = format!("{}:", chapter);
        self.verses
            .iter()
            .filter(|anchor| anchor.id.starts_with(&prefix))
            .map(|anchor| anchor.id.clone())
            .collect()
    }
}
