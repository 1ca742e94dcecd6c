use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::core::error::Result;
use crate::report::builder::AnalysisReport;

/// Serializes an `AnalysisReport` into the output directory.
///
/// Produces three artifacts per run, named after the query and the report
/// timestamp: the matched passages as JSON, the full analytics as JSON,
/// and a plain-text summary.
pub struct ReportWriter {
    output_dir: PathBuf,
}

/// Paths of the files produced by one `write` call.
#[derive(Debug, Clone)]
pub struct WrittenReports {
    pub passages: PathBuf,
    pub analytics: PathBuf,
    pub summary: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ReportWriter {
            output_dir: output_dir.into(),
        }
    }

    pub fn write(&self, report: &AnalysisReport) -> Result<WrittenReports> {
        fs::create_dir_all(&self.output_dir)?;

        let stamp = report.generated_at.format("%Y%m%d_%H%M%S");
        let base = format!("chapter_{}_verse_{}", report.query.chapter, report.query.verse);

        let mut passages = serde_json::Map::new();
        for record in &report.passages {
            passages.insert(record.reference(), Value::String(record.text.clone()));
        }

        let passages_path = self.output_dir.join(format!("{}_passages_{}.json", base, stamp));
        fs::write(&passages_path, serde_json::to_string_pretty(&passages)?)?;

        let analytics_path = self.output_dir.join(format!("{}_analytics_{}.json", base, stamp));
        fs::write(&analytics_path, serde_json::to_string_pretty(report)?)?;

        let summary_path = self.output_dir.join(format!("{}_summary_{}.txt", base, stamp));
        fs::write(&summary_path, Self::render_summary(report))?;

        Ok(WrittenReports {
            passages: passages_path,
            analytics: analytics_path,
            summary: summary_path,
        })
    }

    /// Human-readable report text, independent of any filesystem.
    pub fn render_summary(report: &AnalysisReport) -> String {
        let mut out = String::new();
        let rule = "-".repeat(40);

        out.push_str("VERSE ANALYTICS SUMMARY\n");
        out.push_str(&format!("{}\n", report.query));
        out.push_str(&format!(
            "Generated: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!("{}\n\n", "=".repeat(50)));

        let stats = &report.stats;
        out.push_str(&format!("BASIC STATISTICS\n{}\n", rule));
        out.push_str(&format!(
            "Passages found: {} (of {} verses scanned)\n",
            report.total_matches, report.total_verses_scanned
        ));
        out.push_str(&format!("Total characters: {}\n", stats.total_characters));
        out.push_str(&format!("Total words: {}\n", stats.total_words));
        out.push_str(&format!("Total sentences: {}\n", stats.total_sentences));
        out.push_str(&format!("Unique words: {}\n", stats.unique_words));
        out.push_str(&format!("Punctuation marks: {}\n\n", stats.punctuation_marks));

        out.push_str(&format!("AVERAGES\n{}\n", rule));
        out.push_str(&format!(
            "Characters per passage: {:.1}\n",
            stats.avg_chars_per_passage
        ));
        out.push_str(&format!("Words per passage: {:.1}\n", stats.avg_words_per_passage));
        out.push_str(&format!(
            "Sentences per passage: {:.1}\n",
            stats.avg_sentences_per_passage
        ));
        out.push_str(&format!(
            "Sentence length: {:.1} words\n",
            stats.avg_sentence_length
        ));
        out.push_str(&format!(
            "Characters per word: {:.1}\n\n",
            stats.avg_chars_per_word
        ));

        out.push_str(&format!("LENGTH DISTRIBUTION\n{}\n", rule));
        out.push_str("Character counts:\n");
        for p in &stats.character_counts.percentiles {
            out.push_str(&format!("  {}th: {:.0} chars\n", p.rank, p.value));
        }
        out.push_str("Word counts:\n");
        for p in &stats.word_counts.percentiles {
            out.push_str(&format!("  {}th: {:.0} words\n", p.rank, p.value));
        }
        out.push('\n');

        if let Some(extremes) = &stats.extremes {
            out.push_str(&format!("EXTREMES\n{}\n", rule));
            out.push_str(&format!(
                "Longest (chars): {} ({})\n",
                extremes.longest_by_chars.reference, extremes.longest_by_chars.value
            ));
            out.push_str(&format!(
                "Shortest (chars): {} ({})\n",
                extremes.shortest_by_chars.reference, extremes.shortest_by_chars.value
            ));
            out.push_str(&format!(
                "Longest (words): {} ({})\n",
                extremes.longest_by_words.reference, extremes.longest_by_words.value
            ));
            out.push_str(&format!(
                "Shortest (words): {} ({})\n\n",
                extremes.shortest_by_words.reference, extremes.shortest_by_words.value
            ));
        }

        out.push_str(&format!("BOOKS\n{}\n", rule));
        out.push_str(&format!(
            "Books containing the passage: {}\n",
            report.books_with_match.len()
        ));
        for entry in &stats.book_distribution {
            out.push_str(&format!("  {}: {}\n", entry.book, entry.count));
        }
        out.push_str(&format!(
            "Books without the passage: {}\n\n",
            report.books_without_match.len()
        ));

        if !stats.top_words.is_empty() {
            out.push_str(&format!("MOST COMMON WORDS\n{}\n", rule));
            for (i, entry) in stats.top_words.iter().enumerate() {
                out.push_str(&format!("  {:2}. '{}': {}\n", i + 1, entry.term, entry.count));
            }
            out.push('\n');
        }

        if !stats.top_characters.is_empty() {
            out.push_str(&format!("MOST COMMON CHARACTERS\n{}\n", rule));
            for (i, entry) in stats.top_characters.iter().enumerate() {
                out.push_str(&format!("  {:2}. '{}': {}\n", i + 1, entry.term, entry.count));
            }
            out.push('\n');
        }

        out.push_str(&format!("NUMBER 7 PATTERNS\n{}\n", rule));
        for rule_report in &report.patterns.rules {
            out.push_str(&format!("{}: {}\n", rule_report.rule, rule_report.count));
            for hit in &rule_report.hits {
                out.push_str(&format!("  - {}: {}\n", hit.reference, hit.detail));
            }
        }
        let aggregate = &report.patterns.aggregate;
        if let Some(m) = &aggregate.combined_characters {
            out.push_str(&format!("combined characters: {} (7x{})\n", m.value, m.multiple));
        }
        if let Some(m) = &aggregate.combined_words {
            out.push_str(&format!("combined words: {} (7x{})\n", m.value, m.multiple));
        }
        if let Some(m) = &aggregate.passage_count {
            out.push_str(&format!("passage count: {} (7x{})\n", m.value, m.multiple));
        }
        out.push('\n');

        out.push_str(&format!("PASSAGES\n{}\n", rule));
        for (i, record) in report.passages.iter().enumerate() {
            out.push_str(&format!("{:2}. {}\n", i + 1, record.reference()));
            out.push_str(&format!("    \"{}\"\n", record.text));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AnalyticsConfig;
    use crate::core::types::VerseRecord;
    use crate::patterns::analyzer::PatternAnalyzer;
    use crate::query::types::PassageQuery;
    use crate::report::builder::ReportBuilder;
    use crate::stats::aggregator::StatsAggregator;

    fn sample_report() -> AnalysisReport {
        let passages = vec![
            VerseRecord::new("Genesis", 2, 2, "on the seventh day God rested"),
            VerseRecord::new("Exodus", 2, 2, "seven days shalt thou keep it"),
        ];
        let stats = StatsAggregator::new(&AnalyticsConfig::default()).summarize(&passages);
        let patterns = PatternAnalyzer::new().summarize(&passages);
        ReportBuilder::new(PassageQuery::new(2, 2).unwrap(), 100)
            .with_passages(passages)
            .with_stats(stats)
            .with_patterns(patterns)
            .with_book_partition(
                vec!["Exodus".to_string(), "Genesis".to_string()],
                vec!["Leviticus".to_string()],
            )
            .build()
    }

    #[test]
    fn renders_all_sections() {
        let text = ReportWriter::render_summary(&sample_report());
        for section in [
            "BASIC STATISTICS",
            "AVERAGES",
            "LENGTH DISTRIBUTION",
            "EXTREMES",
            "BOOKS",
            "MOST COMMON WORDS",
            "NUMBER 7 PATTERNS",
            "PASSAGES",
        ] {
            assert!(text.contains(section), "missing section {}", section);
        }
        assert!(text.contains("ordinal_sevens: 1"));
        assert!(text.contains("explicit_seven: 1"));
    }

    #[test]
    fn writes_three_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let written = ReportWriter::new(dir.path()).write(&sample_report()).unwrap();

        assert!(written.passages.exists());
        assert!(written.analytics.exists());
        assert!(written.summary.exists());

        let passages: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&written.passages).unwrap()).unwrap();
        assert_eq!(
            passages["Genesis 2:2"],
            serde_json::json!("on the seventh day God rested")
        );

        let analytics: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&written.analytics).unwrap()).unwrap();
        assert_eq!(analytics["total_matches"], serde_json::json!(2));
    }

    #[test]
    fn filenames_carry_query_and_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let written = ReportWriter::new(dir.path()).write(&sample_report()).unwrap();
        let name = written.summary.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("chapter_2_verse_2_summary_"));
        assert!(name.ends_with(".txt"));
    }
}
