//! Page-level layout computation
//!
//! This module contains the main entry point for margin layout, taking the
//! chapter's relevant readings and anchor measurements and producing an
//! AnnotationDisplayList. Every call recomputes from scratch; nothing is
//! retained between redraws.

use serde::{Deserialize, Serialize};

use super::clip::{clip_segments, PageBounds};
use super::display_list::*;
use super::geometry::{AnchorProvider, GeometryPositioner};
use super::label::{compose_label, CONTINUATION_MARKER};
use super::lanes::LaneAllocator;
use crate::diagnostics::{LayoutDiagnostic, LayoutIssue};
use crate::models::{AnnotationStream, ChapterAnnotations, Reading};

/// Configuration for margin layout
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between adjacent lanes (pixels)
    pub lane_width: f32,

    /// Distance from the text edge to lane 0 (pixels)
    pub margin_gap: f32,

    /// Marker text for readings continuing beyond the chapter
    pub continuation_marker: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lane_width: 25.0,
            margin_gap: 10.0,
            continuation_marker: CONTINUATION_MARKER.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Side offset for a lane
    pub fn side_offset(&self, lane: usize) -> f32 {
        lane as f32 * self.lane_width + self.margin_gap
    }
}

/// Main layout engine for computing margin display lists
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine;

/// Inputs shared by both margins of one pass
struct PassContext<'a, 'p, P: AnchorProvider + ?Sized> {
    chapter: u32,
    positioner: GeometryPositioner<'p, P>,
    page: Option<PageBounds<'a>>,
    config: &'a LayoutConfig,
}

impl LayoutEngine {
    /// Create a new layout engine
    pub fn new() -> Self {
        Self
    }

    /// Compute the complete margin layout for a chapter page
    ///
    /// The two margins are allocated independently; lanes are not shared.
    ///
    /// # Arguments
    /// * `annotations` - Readings already pruned to the displayed chapter
    /// * `anchors` - Measurements of the rendered verse anchors
    /// * `config` - Lane geometry and label settings
    ///
    /// # Returns
    /// AnnotationDisplayList with bars for both margins
    pub fn compute_layout<P: AnchorProvider + ?Sized>(
        &self,
        annotations: &ChapterAnnotations,
        anchors: &P,
        config: &LayoutConfig,
    ) -> AnnotationDisplayList {
        let chapter = annotations.chapter;
        let rendered = anchors.rendered_verses(chapter);
        let context = PassContext {
            chapter,
            positioner: GeometryPositioner::new(anchors),
            page: PageBounds::from_rendered(&rendered),
            config,
        };

        let mut diagnostics = Vec::new();
        let left = self.layout_margin(
            AnnotationStream::Lectionary,
            &annotations.lectionary,
            &context,
            &mut diagnostics,
        );
        let right = self.layout_margin(
            AnnotationStream::DivineOffice,
            &annotations.divine_office,
            &context,
            &mut diagnostics,
        );

        log::debug!(
            "Chapter {} layout: {} left bars in {} lanes, {} right bars in {} lanes, {} skipped",
            chapter,
            left.bars.len(),
            left.lane_count,
            right.bars.len(),
            right.lane_count,
            diagnostics.len()
        );

        AnnotationDisplayList {
            chapter,
            left,
            right,
            diagnostics,
        }
    }

    /// Lay out one margin's readings in data order
    fn layout_margin<P: AnchorProvider + ?Sized>(
        &self,
        stream: AnnotationStream,
        readings: &[Reading],
        context: &PassContext<'_, '_, P>,
        diagnostics: &mut Vec<LayoutDiagnostic>,
    ) -> MarginLayout {
        let mut lanes = LaneAllocator::new();
        let mut bars = Vec::new();

        for (index, reading) in readings.iter().enumerate() {
            let mut skip = |issue: LayoutIssue, message: String| {
                log::warn!("Skipping {} reading '{}': {}", stream.as_str(), reading.name, message);
                diagnostics.push(LayoutDiagnostic {
                    stream,
                    reading_index: index,
                    reading: reading.name.clone(),
                    issue,
                    message,
                });
            };

            // Full unclipped span drives the continuation label
            let Some(chapter_span) = reading.chapter_span() else {
                continue;
            };

            let segments = reading.segments();
            let clipped = match clip_segments(&segments, context.chapter, context.page) {
                Ok(clipped) => clipped,
                Err(e) => {
                    skip(LayoutIssue::NoRenderedVerses, e.to_string());
                    continue;
                }
            };

            let (Some(first), Some(last)) = (clipped.first(), clipped.last()) else {
                continue;
            };

            let Some(total) = context.positioner.span(first.start, last.end) else {
                skip(
                    LayoutIssue::UnresolvedSpan,
                    format!("no anchor for range {}..{}", first.start, last.end),
                );
                continue;
            };

            let lane = lanes.allocate(total);
            let side_offset = context.config.side_offset(lane);
            let mut label = Some(compose_label(
                &reading.name,
                chapter_span,
                context.chapter,
                &context.config.continuation_marker,
            ));

            for segment in &clipped {
                let Some(span) = context.positioner.span(segment.start, segment.end) else {
                    skip(
                        LayoutIssue::UnresolvedSegment,
                        format!("no anchor for segment {}..{}", segment.start, segment.end),
                    );
                    continue;
                };

                bars.push(BarDescriptor {
                    top: span.start,
                    height: span.height(),
                    side_offset,
                    lane,
                    color: reading.color.clone(),
                    label: label.take(),
                });
            }
        }

        MarginLayout::new(stream, lanes.lane_count(), bars)
    }
}
