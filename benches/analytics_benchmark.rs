use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use versedex::core::analytics::VerseAnalytics;
use versedex::core::config::AnalyticsConfig;
use versedex::core::types::VerseRecord;
use versedex::corpus::store::VerseStore;
use versedex::patterns::analyzer::PatternAnalyzer;
use versedex::query::matcher::PassageMatcher;
use versedex::query::types::PassageQuery;
use versedex::stats::aggregator::StatsAggregator;

/// Helper to generate a synthetic verse corpus
fn create_test_corpus(verse_count: usize) -> VerseStore {
    let mut rng = rand::thread_rng();
    let books = [
        "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy", "Joshua", "Judges", "Ruth",
        "Psalms", "Proverbs", "Isaiah", "Matthew", "Mark", "Luke", "John", "Revelation",
    ];
    let words = [
        "and", "the", "lord", "said", "unto", "seven", "seventh", "days", "sabbath", "light",
        "earth", "heaven", "people", "king", "house", "went",
    ];

    let mut verses = Vec::with_capacity(verse_count);
    for _ in 0..verse_count {
        let word_count = rng.gen_range(8..40);
        let text: String = (0..word_count)
            .map(|_| words[rng.gen_range(0..words.len())])
            .collect::<Vec<_>>()
            .join(" ");
        verses.push(VerseRecord::new(
            books[rng.gen_range(0..books.len())],
            rng.gen_range(1..51),
            rng.gen_range(1..31),
            text,
        ));
    }
    VerseStore::new(verses)
}

/// Benchmark the chapter/verse filter over growing corpora
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    for size in [1_000, 10_000, 30_000] {
        let store = create_test_corpus(size);
        let matcher = PassageMatcher::new();
        let query = PassageQuery::new(9, 23).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(matcher.select(store.verses(), &query)));
        });
    }
    group.finish();
}

/// Benchmark statistics aggregation over a fixed match set
fn bench_stats(c: &mut Criterion) {
    let store = create_test_corpus(10_000);
    let matcher = PassageMatcher::new();
    let query = PassageQuery::new(9, 23).unwrap();
    let matched = matcher.select(store.verses(), &query);
    let aggregator = StatsAggregator::new(&AnalyticsConfig::default());

    c.bench_function("stats_summarize", |b| {
        b.iter(|| black_box(aggregator.summarize(&matched)));
    });
}

/// Benchmark pattern rule evaluation over a fixed match set
fn bench_patterns(c: &mut Criterion) {
    let store = create_test_corpus(10_000);
    let matcher = PassageMatcher::new();
    let query = PassageQuery::new(9, 23).unwrap();
    let matched = matcher.select(store.verses(), &query);
    let analyzer = PatternAnalyzer::new();

    c.bench_function("patterns_summarize", |b| {
        b.iter(|| black_box(analyzer.summarize(&matched)));
    });
}

/// Benchmark the whole pipeline end to end
fn bench_full_analysis(c: &mut Criterion) {
    let analytics = VerseAnalytics::new(create_test_corpus(30_000));
    let query = PassageQuery::new(9, 23).unwrap();

    c.bench_function("full_analysis", |b| {
        b.iter(|| black_box(analytics.analyze(&query)));
    });
}

criterion_group!(benches, bench_filter, bench_stats, bench_patterns, bench_full_analysis);
criterion_main!(benches);
