use std::collections::HashSet;

use crate::patterns::rule::{PatternHit, PatternRule, VerseContext};

/// Analyzer tokens that belong to a configured list of seven-associated
/// terms (sabbath, sevenfold, ...).
pub struct VocabularyRule {
    terms: HashSet<String>,
}

impl VocabularyRule {
    pub fn new(terms: &[String]) -> Self {
        VocabularyRule {
            terms: terms.iter().map(|term| term.to_lowercase()).collect(),
        }
    }
}

impl PatternRule for VocabularyRule {
    fn name(&self) -> &str {
        "biblical_seven_terms"
    }

    fn evaluate(&self, ctx: &VerseContext) -> Option<PatternHit> {
        let mut matched: Vec<&str> = Vec::new();
        for token in ctx.tokens {
            if self.terms.contains(&token.text) && !matched.contains(&token.text.as_str()) {
                matched.push(&token.text);
            }
        }

        if matched.is_empty() {
            return None;
        }
        Some(PatternHit::new(ctx.record.reference(), matched.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::core::config::PatternConfig;
    use crate::core::types::VerseRecord;

    fn context_hit(text: &str) -> Option<PatternHit> {
        let record = VerseRecord::new("Exodus", 20, 10, text);
        let tokens = Analyzer::standard().analyze(text);
        let ctx = VerseContext {
            record: &record,
            text,
            tokens: &tokens,
            position: 1,
        };
        VocabularyRule::new(&PatternConfig::default().vocabulary).evaluate(&ctx)
    }

    #[test]
    fn matches_configured_terms_case_insensitively() {
        let hit = context_hit("the Sabbath of the LORD").unwrap();
        assert_eq!(hit.detail, "sabbath");
    }

    #[test]
    fn lists_each_term_once() {
        let hit = context_hit("a week of weeks, week after week").unwrap();
        assert_eq!(hit.detail, "week");
    }

    #[test]
    fn requires_whole_tokens() {
        // "weeks" is a different token than "week".
        assert!(context_hit("after two weeksend").is_none());
    }
}
