use std::collections::HashSet;

use crate::core::config::AnalyticsConfig;
use crate::corpus::store::VerseStore;
use crate::patterns::analyzer::PatternAnalyzer;
use crate::query::matcher::PassageMatcher;
use crate::query::types::PassageQuery;
use crate::report::builder::{AnalysisReport, ReportBuilder};
use crate::stats::aggregator::StatsAggregator;

/// Facade wiring store, filter, aggregators and report assembly together.
///
/// One instance serves any number of queries; each `analyze` call is
/// independent and produces a fresh report.
pub struct VerseAnalytics {
    store: VerseStore,
    matcher: PassageMatcher,
    aggregator: StatsAggregator,
    patterns: PatternAnalyzer,
}

impl VerseAnalytics {
    pub fn new(store: VerseStore) -> Self {
        VerseAnalytics::with_config(store, AnalyticsConfig::default())
    }

    pub fn with_config(store: VerseStore, config: AnalyticsConfig) -> Self {
        VerseAnalytics {
            store,
            matcher: PassageMatcher::new(),
            aggregator: StatsAggregator::new(&config),
            patterns: PatternAnalyzer::from_config(&config.patterns, config.strip_bracketed),
        }
    }

    pub fn store(&self) -> &VerseStore {
        &self.store
    }

    pub fn analyze(&self, query: &PassageQuery) -> AnalysisReport {
        let passages = self.matcher.select(self.store.verses(), query);

        let stats = self.aggregator.summarize(&passages);
        let patterns = self.patterns.summarize(&passages);

        let matched: HashSet<&str> = passages.iter().map(|p| p.book.as_str()).collect();
        let (with, without): (Vec<String>, Vec<String>) = self
            .store
            .books()
            .iter()
            .cloned()
            .partition(|book| matched.contains(book.as_str()));

        ReportBuilder::new(*query, self.store.len())
            .with_passages(passages)
            .with_stats(stats)
            .with_patterns(patterns)
            .with_book_partition(with, without)
            .build()
    }
}
