//! Models module for the margin annotation engine
//!
//! This module contains the data structures read from a book's annotation
//! data file and the structured verse references they are resolved into.

pub mod verse;
pub mod reading;
pub mod catalog;

// Re-export commonly used types
pub use verse::{ChapterSpan, VerseRef};
pub use reading::{AnnotationStream, BookAnnotations, ChapterAnnotations, Reading, Segment};
pub use catalog::{BookInfo, CATHOLIC_CANON};
