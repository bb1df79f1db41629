//! Book catalog for the Catholic canon
//!
//! Chapter pages are published as `bible/{slug}-{chapter:02}.html` and each
//! book's reading data as `data/{slug}.json`, where the slug is the book name
//! lowercased with spaces replaced by hyphens.

use serde::Serialize;

/// A book and its chapter count
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookInfo {
    pub name: &'static str,
    pub chapters: u32,
}

impl BookInfo {
    const fn new(name: &'static str, chapters: u32) -> Self {
        Self { name, chapters }
    }

    pub fn slug(&self) -> String {
        book_slug(self.name)
    }

    pub fn has_chapter(&self, chapter: u32) -> bool {
        (1..=self.chapters).contains(&chapter)
    }
}

/// The 73 books in canonical order
pub static CATHOLIC_CANON: [BookInfo; 73] = [
    BookInfo::new("Genesis", 50),
    BookInfo::new("Exodus", 40),
    BookInfo::new("Leviticus", 27),
    BookInfo::new("Numbers", 36),
    BookInfo::new("Deuteronomy", 34),
    BookInfo::new("Joshua", 24),
    BookInfo::new("Judges", 21),
    BookInfo::new("Ruth", 4),
    BookInfo::new("1 Samuel", 31),
    BookInfo::new("2 Samuel", 24),
    BookInfo::new("1 Kings", 22),
    BookInfo::new("2 Kings", 25),
    BookInfo::new("1 Chronicles", 29),
    BookInfo::new("2 Chronicles", 36),
    BookInfo::new("Ezra", 10),
    BookInfo::new("Nehemiah", 13),
    BookInfo::new("Tobit", 14),
    BookInfo::new("Judith", 16),
    BookInfo::new("Esther", 10),
    BookInfo::new("1 Maccabees", 16),
    BookInfo::new("2 Maccabees", 15),
    BookInfo::new("Job", 42),
    BookInfo::new("Psalms", 150),
    BookInfo::new("Proverbs", 31),
    BookInfo::new("Ecclesiastes", 12),
    BookInfo::new("Song of Songs", 8),
    BookInfo::new("Wisdom", 19),
    BookInfo::new("Sirach", 51),
    BookInfo::new("Isaiah", 66),
    BookInfo::new("Jeremiah", 52),
    BookInfo::new("Lamentations", 5),
    BookInfo::new("Baruch", 6),
    BookInfo::new("Ezekiel", 48),
    BookInfo::new("Daniel", 14),
    BookInfo::new("Hosea", 14),
    BookInfo::new("Joel", 3),
    BookInfo::new("Amos", 9),
    BookInfo::new("Obadiah", 1),
    BookInfo::new("Jonah", 4),
    BookInfo::new("Micah", 7),
    BookInfo::new("Nahum", 3),
    BookInfo::new("Habakkuk", 3),
    BookInfo::new("Zephaniah", 3),
    BookInfo::new("Haggai", 2),
    BookInfo::new("Zechariah", 14),
    BookInfo::new("Malachi", 4),
    BookInfo::new("Matthew", 28),
    BookInfo::new("Mark", 16),
    BookInfo::new("Luke", 24),
    BookInfo::new("John", 21),
    BookInfo::new("Acts", 28),
    BookInfo::new("Romans", 16),
    BookInfo::new("1 Corinthians", 16),
    BookInfo::new("2 Corinthians", 13),
    BookInfo::new("Galatians", 6),
    BookInfo::new("Ephesians", 6),
    BookInfo::new("Philippians", 4),
    BookInfo::new("Colossians", 4),
    BookInfo::new("1 Thessalonians", 5),
    BookInfo::new("2 Thessalonians", 3),
    BookInfo::new("1 Timothy", 6),
    BookInfo::new("2 Timothy", 4),
    BookInfo::new("Titus", 3),
    BookInfo::new("Philemon", 1),
    BookInfo::new("Hebrews", 13),
    BookInfo::new("James", 5),
    BookInfo::new("1 Peter", 5),
    BookInfo::new("2 Peter", 3),
    BookInfo::new("1 John", 5),
    BookInfo::new("2 John", 1),
    BookInfo::new("3 John", 1),
    BookInfo::new("Jude", 1),
    BookInfo::new("Revelation", 22),
];

/// URL slug for a book name ("Song of Songs" -> "song-of-songs")
pub fn book_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Look up a book by its slug
pub fn book_by_slug(slug: &str) -> Option<&'static BookInfo> {
    CATHOLIC_CANON.iter().find(|book| book_slug(book.name) == slug)
}

/// File name of a chapter page, zero-padded to two digits
pub fn chapter_page_file(slug: &str, chapter: u32) -> String {
    format!("{}-{:02}.html", slug, chapter)
}

/// Path of a book's annotation data, relative to a chapter page
pub fn annotation_data_file(slug: &str) -> String {
    format!("../data/{}.json", slug)
}

/// Page preceding `chapter`, crossing into the previous book's last chapter
pub fn previous_chapter_page(slug: &str, chapter: u32) -> Option<String> {
    let index = CATHOLIC_CANON.iter().position(|book| book_slug(book.name) == slug)?;
    if chapter > 1 {
        return Some(chapter_page_file(slug, chapter - 1));
    }
    let previous = CATHOLIC_CANON.get(index.checked_sub(1)?)?;
    Some(chapter_page_file(&previous.slug(), previous.chapters))
}

/// Page following `chapter`, crossing into the next book's first chapter
pub fn next_chapter_page(slug: &str, chapter: u32) -> Option<String> {
    let index = CATHOLIC_CANON.iter().position(|book| book_slug(book.name) == slug)?;
    let book = &CATHOLIC_CANON[index];
    if chapter < book.chapters {
        return Some(chapter_page_file(slug, chapter + 1));
    }
    let next = CATHOLIC_CANON.get(index + 1)?;
    Some(chapter_page_file(&next.slug(), 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs() {
        assert_eq!(book_slug("Song of Songs"), "song-of-songs");
        assert_eq!(book_slug("1 Maccabees"), "1-maccabees");
        assert_eq!(book_by_slug("psalms").map(|b| b.chapters), Some(150));
        assert!(book_by_slug("gospel-of-thomas").is_none());
    }

    #[test]
    fn test_page_and_data_paths() {
        assert_eq!(chapter_page_file("genesis", 1), "genesis-01.html");
        assert_eq!(chapter_page_file("psalms", 119), "psalms-119.html");
        assert_eq!(annotation_data_file("1-kings"), "../data/1-kings.json");
    }

    #[test]
    fn test_navigation_within_book() {
        assert_eq!(previous_chapter_page("exodus", 3).as_deref(), Some("exodus-02.html"));
        assert_eq!(next_chapter_page("exodus", 3).as_deref(), Some("exodus-04.html"));
    }

    #[test]
    fn test_navigation_across_books() {
        assert_eq!(previous_chapter_page("exodus", 1).as_deref(), Some("genesis-50.html"));
        assert_eq!(next_chapter_page("genesis", 50).as_deref(), Some("exodus-01.html"));
        assert_eq!(previous_chapter_page("genesis", 1), None);
        assert_eq!(next_chapter_page("revelation", 22), None);
    }

    #[test]
    fn test_has_chapter() {
        let obadiah = book_by_slug("obadiah").unwrap();
        assert!(obadiah.has_chapter(1));
        assert!(!obadiah.has_chapter(0));
        assert!(!obadiah.has_chapter(2));
    }
}
