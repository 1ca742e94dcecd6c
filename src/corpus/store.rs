use crate::core::types::VerseRecord;

/// In-memory verse collection, read-only after construction.
///
/// Records are sorted by (book, chapter, verse) so match sets, position
/// counting, and first-seen tie-breaks are deterministic regardless of the
/// iteration order of the source file.
pub struct VerseStore {
    verses: Vec<VerseRecord>,
    books: Vec<String>,
}

impl VerseStore {
    pub fn new(mut verses: Vec<VerseRecord>) -> Self {
        verses.sort_by(|a, b| {
            a.book
                .cmp(&b.book)
                .then(a.chapter.cmp(&b.chapter))
                .then(a.verse.cmp(&b.verse))
        });

        let mut books: Vec<String> = Vec::new();
        for record in &verses {
            if books.last().map(String::as_str) != Some(record.book.as_str()) {
                books.push(record.book.clone());
            }
        }

        VerseStore { verses, books }
    }

    pub fn verses(&self) -> &[VerseRecord] {
        &self.verses
    }

    /// Unique book names in store order.
    pub fn books(&self) -> &[String] {
        &self.books
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}
