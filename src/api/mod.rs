//! Liturgy Margins WASM API
//!
//! This module provides the JavaScript-facing API for the chapter page.
//!
//! # Module Structure
//!
//! - `helpers`: Serialization, error conversion and `[WASM]` console logging
//! - `layout`: Margin layout entry points (`computeAnnotationLayout`, `MarginAnnotator`)
//! - `data`: Verse reference parsing and reading data validation
//! - `catalog`: Book slugs, data file paths and chapter page navigation
//! - `dom`: Anchor measurement straight from the rendered page

pub mod helpers;
pub mod layout;
pub mod data;
pub mod catalog;
pub mod dom;

pub use layout::{compute_annotation_layout, MarginAnnotator};
pub use data::{parse_verse_ref_js, validate_annotations};
pub use catalog::{annotation_data_path, book_chapter_count, chapter_page, next_chapter, previous_chapter};
pub use dom::DomAnchorProvider;
