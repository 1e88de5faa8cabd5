//! Whitespace word segmentation.

use alloc::{boxed::Box, vec::Vec};
use core::{fmt, ops::Deref};

/// One whitespace-free token, punctuation included.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Word(Box<str>);

impl Word {
    /// Returns `None` for empty text or text containing whitespace.
    pub fn new(text: &str) -> Option<Self> {
        if text.is_empty() || text.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self(text.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split `text` into words on runs of whitespace, keeping punctuation.
pub fn segment(text: &str) -> Vec<Word> {
    let mut words = Vec::with_capacity(count_words(text));
    let mut cursor = 0usize;

    while let Some((word, next_cursor)) = next_word_at(text, cursor) {
        words.push(Word(word.into()));
        cursor = next_cursor;
    }

    words
}

pub fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    let mut cursor = 0usize;

    while let Some((_, next_cursor)) = next_word_at(text, cursor) {
        count += 1;
        cursor = next_cursor;
    }

    count
}

/// Next word starting at byte offset `cursor`, with the offset just past it.
fn next_word_at(text: &str, cursor: usize) -> Option<(&str, usize)> {
    let rest = text.get(cursor..)?;
    let start = cursor + rest.find(|c: char| !c.is_whitespace())?;
    let end = text[start..]
        .find(char::is_whitespace)
        .map_or(text.len(), |offset| start + offset);

    Some((&text[start..end], end))
}
