use regex::Regex;

use crate::patterns::rule::{PatternHit, PatternRule, VerseContext};

/// Integer tokens in the text that are non-zero multiples of 7.
pub struct DivisibleNumberRule {
    number: Regex,
}

impl DivisibleNumberRule {
    pub fn new() -> Self {
        DivisibleNumberRule {
            number: Regex::new(r"\b\d+\b").unwrap(),
        }
    }
}

impl Default for DivisibleNumberRule {
    fn default() -> Self {
        DivisibleNumberRule::new()
    }
}

impl PatternRule for DivisibleNumberRule {
    fn name(&self) -> &str {
        "numbers_divisible_by_7"
    }

    fn evaluate(&self, ctx: &VerseContext) -> Option<PatternHit> {
        let multiples: Vec<String> = self
            .number
            .find_iter(ctx.text)
            .filter_map(|m| m.as_str().parse::<u64>().ok())
            .filter(|&n| n > 0 && n % 7 == 0)
            .map(|n| format!("{} (7x{})", n, n / 7))
            .collect();

        if multiples.is_empty() {
            return None;
        }
        Some(PatternHit::new(ctx.record.reference(), multiples.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::VerseRecord;

    fn context_hit(text: &str) -> Option<PatternHit> {
        let record = VerseRecord::new("Daniel", 9, 25, text);
        let ctx = VerseContext {
            record: &record,
            text,
            tokens: &[],
            position: 1,
        };
        DivisibleNumberRule::new().evaluate(&ctx)
    }

    #[test]
    fn matches_multiples_of_seven() {
        let hit = context_hit("threescore and 14 years, then 49 more").unwrap();
        assert_eq!(hit.detail, "14 (7x2), 49 (7x7)");
    }

    #[test]
    fn ignores_other_numbers_and_zero() {
        assert!(context_hit("40 days and 40 nights").is_none());
        assert!(context_hit("0 remained").is_none());
    }

    #[test]
    fn no_numeric_tokens_no_hit() {
        assert!(context_hit("And God said, Let there be light").is_none());
    }
}
