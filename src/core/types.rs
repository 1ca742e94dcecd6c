use serde::{Serialize, Deserialize};

/// One Bible verse with its location in the corpus.
///
/// Records are immutable once loaded; every downstream component reads
/// them by reference or clones them into a match set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl VerseRecord {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        VerseRecord {
            book: book.into(),
            chapter,
            verse,
            text: text.into(),
        }
    }

    /// Canonical reference string, e.g. "Genesis 1:3".
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}
