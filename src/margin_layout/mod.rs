//! Margin Annotation Layout Engine
//!
//! This module computes where reading annotations are drawn beside a rendered
//! chapter, generating a display list with all bar positions, lane offsets and
//! labels needed for JavaScript to render the margins.
//!
//! Pipeline per margin: relevance filter (once, at load) -> segment clipping
//! -> pixel span resolution -> lane allocation -> label composition.

pub mod relevance;
pub mod clip;
pub mod geometry;
pub mod lanes;
pub mod label;
pub mod display_list;
pub mod document;

pub use document::{LayoutEngine, LayoutConfig};
pub use display_list::{AnnotationDisplayList, BarDescriptor, MarginLayout, MarginSide};
pub use geometry::{AnchorBox, AnchorMeasurement, AnchorProvider, GeometryPositioner, PageAnchors, PixelSpan};
pub use clip::{clip_segments, ClipError, ClippedSegment, PageBounds};
pub use lanes::{LaneAllocator, OccupiedSlot};
pub use label::{compose_label, Continuation, CONTINUATION_MARKER};
