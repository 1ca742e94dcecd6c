use crate::core::types::VerseRecord;
use crate::query::types::PassageQuery;

/// Selects the verses whose chapter and verse both equal the query pair.
///
/// Equality only; an empty selection is a legitimate outcome, not a
/// failure.
pub struct PassageMatcher;

impl PassageMatcher {
    pub fn new() -> Self {
        PassageMatcher
    }

    pub fn matches(&self, record: &VerseRecord, query: &PassageQuery) -> bool {
        record.chapter == query.chapter && record.verse == query.verse
    }

    /// The ordered match set for this query, in store order.
    pub fn select(&self, verses: &[VerseRecord], query: &PassageQuery) -> Vec<VerseRecord> {
        verses
            .iter()
            .filter(|record| self.matches(record, query))
            .cloned()
            .collect()
    }
}

impl Default for PassageMatcher {
    fn default() -> Self {
        PassageMatcher::new()
    }
}
