//! Verse reference parser
//!
//! Grammar: `chapter ":" verse part?` where chapter and verse are positive
//! decimal integers and `part` is a run of lowercase ASCII letters marking a
//! sub-verse division ("5a", "5b"). The part never affects ordering.

use crate::models::VerseRef;
use thiserror::Error;

/// Reasons a verse identifier cannot be used
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerseRefError {
    #[error("Empty verse reference")]
    Empty,

    #[error("Verse reference '{0}' has no chapter separator")]
    MissingColon(String),

    #[error("Verse reference '{0}' has an invalid chapter")]
    InvalidChapter(String),

    #[error("Verse reference '{0}' has an invalid verse")]
    InvalidVerse(String),
}

/// Parse a verse identifier, discarding any sub-verse part letter
///
/// # Examples
/// ```
/// use liturgy_margins_wasm::parse::parse_verse_ref;
///
/// let verse = parse_verse_ref("3:5a").unwrap();
/// assert_eq!((verse.chapter, verse.verse), (3, 5));
/// ```
pub fn parse_verse_ref(text: &str) -> Result<VerseRef, VerseRefError> {
    parse_verse_ref_with_part(text).map(|(verse, _)| verse)
}

/// Parse a verse identifier, also returning the sub-verse part letters if any
pub fn parse_verse_ref_with_part(text: &str) -> Result<(VerseRef, Option<&str>), VerseRefError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(VerseRefError::Empty);
    }

    let (chapter_str, verse_str) = trimmed
        .split_once(':')
        .ok_or_else(|| VerseRefError::MissingColon(text.to_string()))?;

    let chapter = parse_positive(chapter_str)
        .ok_or_else(|| VerseRefError::InvalidChapter(text.to_string()))?;

    // Split "5ab" into the verse digits and the part letters
    let digits_end = verse_str
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(verse_str.len());
    let (digits, part) = verse_str.split_at(digits_end);

    if !part.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(VerseRefError::InvalidVerse(text.to_string()));
    }

    let verse = parse_positive(digits)
        .ok_or_else(|| VerseRefError::InvalidVerse(text.to_string()))?;

    let part = if part.is_empty() { None } else { Some(part) };
    Ok((VerseRef::new(chapter, verse), part))
}

/// Chapter number of a verse identifier, if it parses
pub fn chapter_of(text: &str) -> Option<u32> {
    parse_verse_ref(text).ok().map(|verse| verse.chapter)
}

fn parse_positive(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().filter(|n| *n >= 1)
}
