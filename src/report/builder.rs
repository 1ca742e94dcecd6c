use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::core::types::VerseRecord;
use crate::patterns::analyzer::PatternSummary;
use crate::query::types::PassageQuery;
use crate::stats::aggregator::StatsSummary;

/// The complete result of one analysis run, ready for a writer.
///
/// Immutable once built; holds everything a serializer needs and nothing
/// about where or how it gets persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub query: PassageQuery,
    pub generated_at: DateTime<Utc>,
    pub total_verses_scanned: usize,
    pub total_matches: usize,
    pub passages: Vec<VerseRecord>,
    pub stats: StatsSummary,
    pub patterns: PatternSummary,
    pub books_with_match: Vec<String>,
    pub books_without_match: Vec<String>,
}

/// Assembles an `AnalysisReport` from the component outputs.
///
/// Pieces that were never supplied default to their empty shapes; a
/// missing summary is a programming error upstream, not a runtime
/// condition worth failing over.
pub struct ReportBuilder {
    query: PassageQuery,
    total_verses_scanned: usize,
    passages: Vec<VerseRecord>,
    stats: Option<StatsSummary>,
    patterns: Option<PatternSummary>,
    books_with_match: Vec<String>,
    books_without_match: Vec<String>,
}

impl ReportBuilder {
    pub fn new(query: PassageQuery, total_verses_scanned: usize) -> Self {
        ReportBuilder {
            query,
            total_verses_scanned,
            passages: Vec::new(),
            stats: None,
            patterns: None,
            books_with_match: Vec::new(),
            books_without_match: Vec::new(),
        }
    }

    pub fn with_passages(mut self, passages: Vec<VerseRecord>) -> Self {
        self.passages = passages;
        self
    }

    pub fn with_stats(mut self, stats: StatsSummary) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_patterns(mut self, patterns: PatternSummary) -> Self {
        self.patterns = Some(patterns);
        self
    }

    pub fn with_book_partition(mut self, with: Vec<String>, without: Vec<String>) -> Self {
        self.books_with_match = with;
        self.books_without_match = without;
        self
    }

    pub fn build(self) -> AnalysisReport {
        AnalysisReport {
            query: self.query,
            generated_at: Utc::now(),
            total_verses_scanned: self.total_verses_scanned,
            total_matches: self.passages.len(),
            passages: self.passages,
            stats: self.stats.unwrap_or_default(),
            patterns: self.patterns.unwrap_or_default(),
            books_with_match: self.books_with_match,
            books_without_match: self.books_without_match,
        }
    }
}
