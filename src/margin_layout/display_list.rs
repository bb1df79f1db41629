//! Display List for Margin Rendering
//!
//! This module defines the output structure returned from the layout engine to
//! JavaScript. It carries every bar's position, lane offset, color and label so
//! the page can replace both margins' contents without any measurement logic.

use serde::{Deserialize, Serialize};

use crate::diagnostics::LayoutDiagnostic;
use crate::models::AnnotationStream;

/// Which margin of the text a stream is drawn in
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarginSide {
    Left,
    Right,
}

impl MarginSide {
    /// Lectionary readings go left, Divine Office readings go right
    pub fn for_stream(stream: AnnotationStream) -> Self {
        match stream {
            AnnotationStream::Lectionary => MarginSide::Left,
            AnnotationStream::DivineOffice => MarginSide::Right,
        }
    }

    /// CSS class for bars in this margin
    pub fn bar_class(&self) -> &'static str {
        match self {
            MarginSide::Left => "annotation-bar-left",
            MarginSide::Right => "annotation-bar-right",
        }
    }

    /// CSS property the side offset is applied to (measured away from the text)
    pub fn offset_property(&self) -> &'static str {
        match self {
            MarginSide::Left => "right",
            MarginSide::Right => "left",
        }
    }
}

/// One vertical bar to draw
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BarDescriptor {
    /// Top offset relative to the text container
    pub top: f32,

    /// Bar height in pixels
    pub height: f32,

    /// Distance from the text edge: `lane * lane_width + margin_gap`
    pub side_offset: f32,

    /// Lane index within the margin
    pub lane: usize,

    /// Border and label color
    pub color: String,

    /// Label text; only the first bar of each reading carries one
    pub label: Option<String>,
}

/// All bars for one margin
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarginLayout {
    pub side: MarginSide,
    pub stream: AnnotationStream,
    pub bar_class: String,
    pub offset_property: String,

    /// Lanes used in this margin (0 when empty)
    pub lane_count: usize,

    /// Bars in reading order, then segment order
    pub bars: Vec<BarDescriptor>,
}

impl MarginLayout {
    pub fn new(stream: AnnotationStream, lane_count: usize, bars: Vec<BarDescriptor>) -> Self {
        let side = MarginSide::for_stream(stream);
        Self {
            side,
            stream,
            bar_class: side.bar_class().to_string(),
            offset_property: side.offset_property().to_string(),
            lane_count,
            bars,
        }
    }
}

/// Complete layout for both margins of one chapter page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnnotationDisplayList {
    /// Displayed chapter
    pub chapter: u32,

    /// Lectionary margin
    pub left: MarginLayout,

    /// Divine Office margin
    pub right: MarginLayout,

    /// Readings or segments that could not be placed in this pass
    #[serde(default)]
    pub diagnostics: Vec<LayoutDiagnostic>,
}

impl AnnotationDisplayList {
    pub fn margin(&self, side: MarginSide) -> &MarginLayout {
        match side {
            MarginSide::Left => &self.left,
            MarginSide::Right => &self.right,
        }
    }

    pub fn bar_count(&self) -> usize {
        self.left.bars.len() + self.right.bars.len()
    }
}
