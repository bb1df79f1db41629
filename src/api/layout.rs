//! Margin layout entry points
//!
//! Each call is a full recompute from an immutable reading snapshot and fresh
//! anchor measurements. The page calls these on data load, on resize and
//! after switching translation, always after the chapter text has rendered.

use wasm_bindgen::prelude::*;

use super::dom::DomAnchorProvider;
use super::helpers::{deserialize, deserialize_or_default, js_error, serialize};
use crate::margin_layout::{AnchorProvider, AnnotationDisplayList, LayoutConfig, LayoutEngine, PageAnchors};
use crate::models::catalog::book_by_slug;
use crate::models::{BookAnnotations, ChapterAnnotations};
use crate::{wasm_info, wasm_log, AnnotationError};

/// Lay out both margins from a one-off snapshot
///
/// # Parameters
/// - `book_js`: the book's data (`{lectionaryReadings, divineOffice}`)
/// - `chapter`: displayed chapter number
/// - `anchors_js`: `PageAnchors` measured from the active translation
/// - `config_js`: optional `LayoutConfig`
///
/// # Returns
/// `AnnotationDisplayList` for both margins
#[wasm_bindgen(js_name = computeAnnotationLayout)]
pub fn compute_annotation_layout(
    book_js: JsValue,
    chapter: u32,
    anchors_js: JsValue,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let book: BookAnnotations = deserialize(book_js, "Failed to deserialize annotation data")?;
    let anchors: PageAnchors = deserialize(anchors_js, "Failed to deserialize anchors")?;
    let config: LayoutConfig = deserialize_or_default(config_js, "Failed to deserialize layout config")?;

    let annotator = MarginAnnotator::from_book(&book, chapter);
    let layout = annotator.compute(&anchors, &config);
    serialize(&layout, "Failed to serialize display list")
}

/// Per-page annotation state: the book's readings pruned to one chapter
///
/// Built once when the data file loads; `layout` / `layoutFromDom` are then
/// called on every redraw trigger.
#[wasm_bindgen]
pub struct MarginAnnotator {
    annotations: ChapterAnnotations,
    engine: LayoutEngine,
}

#[wasm_bindgen]
impl MarginAnnotator {
    /// Create from already-parsed book data
    #[wasm_bindgen(constructor)]
    pub fn new(book_js: JsValue, chapter: u32) -> Result<MarginAnnotator, JsValue> {
        let book: BookAnnotations = deserialize(book_js, "Failed to deserialize annotation data")?;
        wasm_info!("MarginAnnotator created for chapter {}", chapter);
        Ok(Self::from_book(&book, chapter))
    }

    /// Create from the raw text of `data/{book}.json`
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str, chapter: u32) -> Result<MarginAnnotator, JsValue> {
        let book = BookAnnotations::from_json_str(json)
            .map_err(|e| js_error("Failed to load annotation data", e))?;
        wasm_info!("MarginAnnotator loaded from JSON for chapter {}", chapter);
        Ok(Self::from_book(&book, chapter))
    }

    /// Create for a known book, rejecting chapters the book does not have
    #[wasm_bindgen(js_name = forBook)]
    pub fn for_book(book_slug: &str, json: &str, chapter: u32) -> Result<MarginAnnotator, JsValue> {
        Self::try_for_book(book_slug, json, chapter)
            .map_err(|e| js_error("Failed to create annotator", e))
    }

    #[wasm_bindgen(getter)]
    pub fn chapter(&self) -> u32 {
        self.annotations.chapter
    }

    /// Number of readings touching the chapter across both margins
    #[wasm_bindgen(js_name = readingCount)]
    pub fn reading_count(&self) -> usize {
        self.annotations.reading_count()
    }

    /// Lay out from a JavaScript anchor snapshot
    pub fn layout(&self, anchors_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
        let anchors: PageAnchors = deserialize(anchors_js, "Failed to deserialize anchors")?;
        let config: LayoutConfig = deserialize_or_default(config_js, "Failed to deserialize layout config")?;

        let layout = self.compute(&anchors, &config);
        serialize(&layout, "Failed to serialize display list")
    }

    /// Lay out by measuring the live page
    #[wasm_bindgen(js_name = layoutFromDom)]
    pub fn layout_from_dom(&self, config_js: JsValue) -> Result<JsValue, JsValue> {
        let config: LayoutConfig = deserialize_or_default(config_js, "Failed to deserialize layout config")?;
        let anchors = DomAnchorProvider::from_window()?;

        let started = now_ms();
        let layout = self.compute(&anchors, &config);
        if let (Some(start), Some(end)) = (started, now_ms()) {
            wasm_log!(
                "layoutFromDom: chapter {}, {} bars in {:.2}ms",
                layout.chapter,
                layout.bar_count(),
                end - start
            );
        }

        serialize(&layout, "Failed to serialize display list")
    }
}

impl MarginAnnotator {
    /// Prune a book's readings to `chapter`
    pub fn from_book(book: &BookAnnotations, chapter: u32) -> Self {
        let annotations = book.for_chapter(chapter);
        log::info!(
            "Chapter {}: {} lectionary and {} divine office readings",
            chapter,
            annotations.lectionary.len(),
            annotations.divine_office.len()
        );
        Self {
            annotations,
            engine: LayoutEngine::new(),
        }
    }

    /// Like `forBook`, returning the typed error
    pub fn try_for_book(book_slug: &str, json: &str, chapter: u32) -> Result<Self, AnnotationError> {
        if let Some(book) = book_by_slug(book_slug) {
            if !book.has_chapter(chapter) {
                return Err(AnnotationError::ChapterOutOfRange {
                    book: book.name.to_string(),
                    chapter,
                    max: book.chapters,
                });
            }
        }
        let data = BookAnnotations::from_json_str(json)?;
        Ok(Self::from_book(&data, chapter))
    }

    pub fn annotations(&self) -> &ChapterAnnotations {
        &self.annotations
    }

    /// Full layout pass against any anchor source
    pub fn compute<P: AnchorProvider + ?Sized>(&self, anchors: &P, config: &LayoutConfig) -> AnnotationDisplayList {
        let layout = self.engine.compute_layout(&self.annotations, anchors, config);
        for diagnostic in &layout.diagnostics {
            log::debug!("{}: {}", diagnostic.reading, diagnostic.message);
        }
        layout
    }
}

fn now_ms() -> Option<f64> {
    let performance = web_sys::window()?.performance()?;
    Some(performance.now())
}
