use regex::Regex;

use crate::patterns::rule::{PatternHit, PatternRule, VerseContext};

/// Whole-word ordinal forms of multiples of seven (seventh, fourteenth,
/// seventy-seventh, ...). Hyphenated forms match as written, which is why
/// this rule scans the text instead of single tokens.
pub struct OrdinalRule {
    pattern: Regex,
}

impl OrdinalRule {
    /// Builds the alternation from the configured ordinal list. An empty
    /// list yields a rule that never matches.
    pub fn new(ordinals: &[String]) -> Self {
        let alternation = ordinals
            .iter()
            .map(|ordinal| regex::escape(ordinal))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = if alternation.is_empty() {
            // \b\B cannot be satisfied at any position.
            Regex::new(r"\b\B").unwrap()
        } else {
            Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
        };
        OrdinalRule { pattern }
    }
}

impl PatternRule for OrdinalRule {
    fn name(&self) -> &str {
        "ordinal_sevens"
    }

    fn evaluate(&self, ctx: &VerseContext) -> Option<PatternHit> {
        let mut matched: Vec<String> = Vec::new();
        for m in self.pattern.find_iter(ctx.text) {
            let form = m.as_str().to_lowercase();
            if !matched.contains(&form) {
                matched.push(form);
            }
        }

        if matched.is_empty() {
            return None;
        }
        Some(PatternHit::new(ctx.record.reference(), matched.join(", ")))
    }
}
