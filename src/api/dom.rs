//! Anchor measurement from the rendered page
//!
//! Reads verse anchors from the active translation (`.translation-text.active`)
//! and measures them against the `.bible-text` container, as the chapter page
//! markup renders them:
//! `<p data-verse="3:5">` for whole verses, `[data-verse-part="3:5a"]` for parts.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::margin_layout::{AnchorBox, AnchorProvider};

const ACTIVE_TRANSLATION: &str = ".translation-text.active";
const TEXT_CONTAINER: &str = ".bible-text";

/// Live-DOM anchor provider for the current page
pub struct DomAnchorProvider {
    document: Document,
    container_top: f32,
}

impl DomAnchorProvider {
    /// Bind to the window's document and measure the text container
    pub fn from_window() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        Self::new(document)
    }

    pub fn new(document: Document) -> Result<Self, JsValue> {
        let container = document
            .query_selector(TEXT_CONTAINER)?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| JsValue::from_str("Text container .bible-text not found"))?;

        Ok(Self {
            container_top: container.offset_top() as f32,
            document,
        })
    }

    fn measure(&self, selector: &str) -> Option<AnchorBox> {
        let element = self
            .document
            .query_selector(selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(AnchorBox::new(
            element.offset_top() as f32 - self.container_top,
            element.offset_height() as f32,
        ))
    }
}

impl AnchorProvider for DomAnchorProvider {
    fn verse_part(&self, id: &str) -> Option<AnchorBox> {
        self.measure(&format!("{} [data-verse-part=\"{}\"]", ACTIVE_TRANSLATION, id))
    }

    fn verse(&self, id: &str) -> Option<AnchorBox> {
        self.measure(&format!("{} [data-verse=\"{}\"]", ACTIVE_TRANSLATION, id))
    }

    fn rendered_verses(&self, chapter: u32) -> Vec<String> {
        let selector = format!("{} p[data-verse^=\"{}:\"]", ACTIVE_TRANSLATION, chapter);
        let Ok(nodes) = self.document.query_selector_all(&selector) else {
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|element| element.get_attribute("data-verse"))
            .collect()
    }
}
