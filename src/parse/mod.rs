//! Parsing module for verse references
//!
//! Converts the textual verse identifiers used by the reading data and the
//! rendered chapter anchors (`"3:5"`, `"3:5a"`) into structured references.

pub mod verse_ref;

// Re-export commonly used types
pub use verse_ref::*;
