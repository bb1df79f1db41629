//! Structured verse references

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::parse::{parse_verse_ref, VerseRefError};

/// A chapter/verse pair
///
/// Orders by chapter first, then verse. Sub-verse part letters are not part of
/// the reference, so "5a" and "5b" compare equal.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseRef {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseRef {
    pub fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseRef {
    type Err = VerseRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_verse_ref(s)
    }
}

/// Inclusive range of chapters touched by a reading or segment
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChapterSpan {
    pub start: u32,
    pub end: u32,
}

impl ChapterSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `chapter` lies within the span (inclusive at both ends)
    pub fn contains(&self, chapter: u32) -> bool {
        self.start <= chapter && chapter <= self.end
    }

    pub fn is_single_chapter(&self) -> bool {
        self.start == self.end
    }
}
