//! Verse reference and reading data operations

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, js_error, serialize};
use crate::diagnostics::analyze_readings;
use crate::models::BookAnnotations;
use crate::parse::parse_verse_ref;
use crate::wasm_warn;

/// Parse a verse identifier ("3:5a") into `{chapter, verse}`
///
/// Throws for malformed identifiers.
#[wasm_bindgen(js_name = parseVerseRef)]
pub fn parse_verse_ref_js(text: &str) -> Result<JsValue, JsValue> {
    let verse = parse_verse_ref(text).map_err(|e| js_error("parseVerseRef", e))?;
    serialize(&verse, "Failed to serialize verse reference")
}

/// Check a book's reading data for malformed or misordered ranges
///
/// # Returns
/// Array of diagnostic marks (empty when the data is clean)
#[wasm_bindgen(js_name = validateAnnotations)]
pub fn validate_annotations(book_js: JsValue) -> Result<js_sys::Array, JsValue> {
    let book: BookAnnotations = deserialize(book_js, "Failed to deserialize annotation data")?;
    let diagnostics = analyze_readings(&book);

    if !diagnostics.is_empty() {
        wasm_warn!(
            "validateAnnotations: {} marks ({} errors)",
            diagnostics.marks.len(),
            diagnostics.error_count()
        );
    }

    let result = js_sys::Array::new();
    for mark in &diagnostics.marks {
        result.push(&serialize(mark, "Failed to serialize diagnostic")?);
    }
    Ok(result)
}
