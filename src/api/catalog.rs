//! Book catalog and chapter page navigation

use wasm_bindgen::prelude::*;

use crate::models::catalog::{
    annotation_data_file, book_by_slug, chapter_page_file, next_chapter_page, previous_chapter_page,
};

/// Relative URL of a book's annotation data (`../data/{slug}.json`)
#[wasm_bindgen(js_name = annotationDataPath)]
pub fn annotation_data_path(book_slug: &str) -> String {
    annotation_data_file(book_slug)
}

/// File name of a chapter page (`{slug}-{chapter:02}.html`)
#[wasm_bindgen(js_name = chapterPage)]
pub fn chapter_page(book_slug: &str, chapter: u32) -> String {
    chapter_page_file(book_slug, chapter)
}

/// Chapter count of a known book, or undefined
#[wasm_bindgen(js_name = bookChapterCount)]
pub fn book_chapter_count(book_slug: &str) -> Option<u32> {
    book_by_slug(book_slug).map(|book| book.chapters)
}

/// Previous chapter page, crossing book boundaries; undefined at Genesis 1
#[wasm_bindgen(js_name = previousChapter)]
pub fn previous_chapter(book_slug: &str, chapter: u32) -> Option<String> {
    previous_chapter_page(book_slug, chapter)
}

/// Next chapter page, crossing book boundaries; undefined at Revelation 22
#[wasm_bindgen(js_name = nextChapter)]
pub fn next_chapter(book_slug: &str, chapter: u32) -> Option<String> {
    next_chapter_page(book_slug, chapter)
}
