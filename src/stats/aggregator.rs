use std::borrow::Cow;

use regex::Regex;
use serde::{Serialize, Deserialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::cleaner::AnnotationStripper;
use crate::core::config::AnalyticsConfig;
use crate::core::types::VerseRecord;
use crate::stats::descriptive::{self, SeriesSummary};
use crate::stats::distribution::{BookCount, BookDistribution};
use crate::stats::frequency::{FrequencyTable, TermCount};

/// Descriptive statistics over one match set.
///
/// A pure function of the match set: identical inputs always produce
/// identical summaries, and the empty set produces the all-zero shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_passages: usize,
    pub total_characters: usize,
    pub total_words: usize,
    pub total_sentences: usize,
    pub unique_words: usize,
    pub punctuation_marks: usize,

    pub avg_chars_per_passage: f64,
    pub avg_words_per_passage: f64,
    pub avg_sentences_per_passage: f64,
    pub avg_sentence_length: f64,
    pub avg_chars_per_word: f64,

    pub character_counts: SeriesSummary,
    pub word_counts: SeriesSummary,
    pub extremes: Option<Extremes>,

    pub top_words: Vec<TermCount>,
    pub top_characters: Vec<TermCount>,
    pub book_distribution: Vec<BookCount>,
}

/// Longest/shortest passages of the match set, first record on ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extremes {
    pub longest_by_chars: PassageMeasure,
    pub shortest_by_chars: PassageMeasure,
    pub longest_by_words: PassageMeasure,
    pub shortest_by_words: PassageMeasure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageMeasure {
    pub reference: String,
    pub value: usize,
}

pub struct StatsAggregator {
    analyzer: Analyzer,
    stripper: AnnotationStripper,
    strip_bracketed: bool,
    percentile_ladder: Vec<u8>,
    top_words: usize,
    top_chars: usize,
    sentences: Regex,
    punctuation: Regex,
}

impl StatsAggregator {
    pub fn new(config: &AnalyticsConfig) -> Self {
        StatsAggregator {
            analyzer: Analyzer::standard(),
            stripper: AnnotationStripper::new(),
            strip_bracketed: config.strip_bracketed,
            percentile_ladder: config.percentile_ladder.clone(),
            top_words: config.top_words,
            top_chars: config.top_chars,
            sentences: Regex::new(r"[.!?]+").unwrap(),
            punctuation: Regex::new(r"[^\w\s]").unwrap(),
        }
    }

    pub fn summarize(&self, records: &[VerseRecord]) -> StatsSummary {
        let mut char_counts = Vec::with_capacity(records.len());
        let mut word_counts = Vec::with_capacity(records.len());
        let mut measures: Vec<(String, usize, usize)> = Vec::with_capacity(records.len());
        let mut words = FrequencyTable::new();
        let mut characters = FrequencyTable::new();
        let mut books = BookDistribution::new();
        let mut total_sentences = 0usize;
        let mut punctuation_marks = 0usize;

        for record in records {
            let text = self.clean(&record.text);

            let char_count = text.chars().count();
            let word_count = text.split_whitespace().count();
            char_counts.push(char_count);
            word_counts.push(word_count);
            measures.push((record.reference(), char_count, word_count));

            for token in self.analyzer.analyze(&text) {
                words.observe(&token.text);
            }
            for ch in text.to_lowercase().chars().filter(|c| !c.is_whitespace()) {
                characters.observe(&ch.to_string());
            }

            total_sentences += self
                .sentences
                .split(&text)
                .filter(|segment| !segment.trim().is_empty())
                .count();
            punctuation_marks += self.punctuation.find_iter(&text).count();
            books.observe(&record.book);
        }

        let total_passages = records.len();
        let total_characters: usize = char_counts.iter().sum();
        let total_words: usize = word_counts.iter().sum();

        let extremes = match (
            first_extreme(&measures, |m| m.1, true),
            first_extreme(&measures, |m| m.1, false),
            first_extreme(&measures, |m| m.2, true),
            first_extreme(&measures, |m| m.2, false),
        ) {
            (Some(lc), Some(sc), Some(lw), Some(sw)) => Some(Extremes {
                longest_by_chars: lc,
                shortest_by_chars: sc,
                longest_by_words: lw,
                shortest_by_words: sw,
            }),
            _ => None,
        };

        StatsSummary {
            total_passages,
            total_characters,
            total_words,
            total_sentences,
            unique_words: words.distinct(),
            punctuation_marks,
            avg_chars_per_passage: ratio(total_characters, total_passages),
            avg_words_per_passage: ratio(total_words, total_passages),
            avg_sentences_per_passage: ratio(total_sentences, total_passages),
            avg_sentence_length: ratio(total_words, total_sentences),
            avg_chars_per_word: ratio(total_characters, total_words),
            character_counts: descriptive::summarize(&char_counts, &self.percentile_ladder),
            word_counts: descriptive::summarize(&word_counts, &self.percentile_ladder),
            extremes,
            top_words: words.top(self.top_words),
            top_characters: characters.top(self.top_chars),
            book_distribution: books.ranked(),
        }
    }

    fn clean<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.strip_bracketed {
            self.stripper.strip(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn first_extreme<F>(
    measures: &[(String, usize, usize)],
    key: F,
    largest: bool,
) -> Option<PassageMeasure>
where
    F: Fn(&(String, usize, usize)) -> usize,
{
    let mut best: Option<(usize, &(String, usize, usize))> = None;
    for entry in measures {
        let value = key(entry);
        match best {
            None => best = Some((value, entry)),
            Some((current, _)) if (largest && value > current) || (!largest && value < current) => {
                best = Some((value, entry));
            }
            _ => {}
        }
    }
    best.map(|(value, entry)| PassageMeasure {
        reference: entry.0.clone(),
        value,
    })
}
