use std::borrow::Cow;

use serde::{Serialize, Deserialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::cleaner::AnnotationStripper;
use crate::core::config::PatternConfig;
use crate::core::types::VerseRecord;
use crate::patterns::rule::{PatternHit, PatternRule, VerseContext};
use crate::patterns::rules::coincidence::LengthCoincidenceRule;
use crate::patterns::rules::divisible::DivisibleNumberRule;
use crate::patterns::rules::explicit::ExplicitMentionRule;
use crate::patterns::rules::ordinal::OrdinalRule;
use crate::patterns::rules::position::PositionRule;
use crate::patterns::rules::reference::ReferenceNumberRule;
use crate::patterns::rules::vocabulary::VocabularyRule;

/// Number-7 pattern metrics over one match set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatternSummary {
    pub rules: Vec<RuleReport>,
    pub aggregate: AggregateSevens,
}

/// Count and hit list for one rule. The count is the number of matching
/// verses, so it never exceeds the match-set size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    pub rule: String,
    pub count: usize,
    pub hits: Vec<PatternHit>,
}

/// Seven-coincidences over the whole match set rather than single verses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregateSevens {
    pub combined_characters: Option<SevenMultiple>,
    pub combined_words: Option<SevenMultiple>,
    pub passage_count: Option<SevenMultiple>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SevenMultiple {
    pub value: usize,
    pub multiple: usize,
}

/// Evaluates the configured pattern rules over a match set.
///
/// Rules are independent: each one sees every verse, and a verse counts
/// once per rule it satisfies.
pub struct PatternAnalyzer {
    rules: Vec<Box<dyn PatternRule>>,
    analyzer: Analyzer,
    stripper: AnnotationStripper,
    strip_bracketed: bool,
}

impl PatternAnalyzer {
    pub fn new() -> Self {
        PatternAnalyzer::from_config(&PatternConfig::default(), true)
    }

    pub fn from_config(config: &PatternConfig, strip_bracketed: bool) -> Self {
        let mut rules: Vec<Box<dyn PatternRule>> = Vec::new();
        if config.explicit_mentions {
            rules.push(Box::new(ExplicitMentionRule::new()));
        }
        if config.divisible_numbers {
            rules.push(Box::new(DivisibleNumberRule::new()));
        }
        if config.vocabulary_terms {
            rules.push(Box::new(VocabularyRule::new(&config.vocabulary)));
        }
        if config.ordinal_forms {
            rules.push(Box::new(OrdinalRule::new(&config.ordinals)));
        }
        if config.length_coincidence {
            rules.push(Box::new(LengthCoincidenceRule));
        }
        if config.reference_numbers {
            rules.push(Box::new(ReferenceNumberRule));
        }
        if config.position_multiples {
            rules.push(Box::new(PositionRule));
        }

        PatternAnalyzer {
            rules,
            analyzer: Analyzer::standard(),
            stripper: AnnotationStripper::new(),
            strip_bracketed,
        }
    }

    /// Appends a caller-supplied rule to the chain.
    pub fn with_rule(mut self, rule: Box<dyn PatternRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn summarize(&self, records: &[VerseRecord]) -> PatternSummary {
        let mut reports: Vec<RuleReport> = self
            .rules
            .iter()
            .map(|rule| RuleReport {
                rule: rule.name().to_string(),
                count: 0,
                hits: Vec::new(),
            })
            .collect();

        let mut combined_characters = 0usize;
        let mut combined_words = 0usize;

        for (index, record) in records.iter().enumerate() {
            let text = self.clean(&record.text);
            let tokens = self.analyzer.analyze(&text);
            combined_characters += text.chars().count();
            combined_words += text.split_whitespace().count();

            let ctx = VerseContext {
                record,
                text: &text,
                tokens: &tokens,
                position: index + 1,
            };

            for (report, rule) in reports.iter_mut().zip(&self.rules) {
                if let Some(hit) = rule.evaluate(&ctx) {
                    report.count += 1;
                    report.hits.push(hit);
                }
            }
        }

        let aggregate = if records.is_empty() {
            AggregateSevens::default()
        } else {
            AggregateSevens {
                combined_characters: seven_multiple(combined_characters),
                combined_words: seven_multiple(combined_words),
                passage_count: seven_multiple(records.len()),
            }
        };

        PatternSummary {
            rules: reports,
            aggregate,
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

impl Default for PatternAnalyzer {
    fn default() -> Self {
        PatternAnalyzer::new()
    }
}

fn seven_multiple(value: usize) -> Option<SevenMultiple> {
    if value > 0 && value % 7 == 0 {
        Some(SevenMultiple {
            value,
            multiple: value / 7,
        })
    } else {
        None
    }
}
