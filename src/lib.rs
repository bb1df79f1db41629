//! Liturgy Bible Margin Annotations WASM Module
//!
//! Lays out reading annotations (lectionary and divine office ranges) as
//! non-overlapping bars in the margins beside a rendered Bible chapter.
//! JavaScript supplies the book's reading data and anchor measurements;
//! this module returns a display list with every bar pre-positioned.

pub mod models;
pub mod parse;
pub mod margin_layout;
pub mod diagnostics;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use margin_layout::{
    AnchorProvider, AnnotationDisplayList, BarDescriptor, LayoutConfig, LayoutEngine, PageAnchors,
};
pub use parse::{parse_verse_ref, VerseRefError};

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors surfaced at the data and API boundaries
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnnotationError {
    /// The reading data file could not be parsed
    #[error("Invalid annotation data: {0}")]
    InvalidData(String),

    /// The requested chapter does not exist in the book
    #[error("Chapter {chapter} out of range for {book} (1..={max})")]
    ChapterOutOfRange { book: String, chapter: u32, max: u32 },

    /// A verse reference failed to parse
    #[error(transparent)]
    VerseRef(#[from] VerseRefError),
}

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Err only when a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Liturgy margin annotation module initialized");
}
