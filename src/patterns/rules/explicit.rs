use regex::Regex;

use crate::patterns::rule::{PatternHit, PatternRule, VerseContext};

/// Whole-word mentions of "seven" itself.
///
/// The word boundary keeps "seventh" and "seventy" out of this rule.
pub struct ExplicitMentionRule {
    word: Regex,
}

impl ExplicitMentionRule {
    pub fn new() -> Self {
        ExplicitMentionRule {
            word: Regex::new(r"(?i)\bseven\b").unwrap(),
        }
    }
}

impl Default for ExplicitMentionRule {
    fn default() -> Self {
        ExplicitMentionRule::new()
    }
}

impl PatternRule for ExplicitMentionRule {
    fn name(&self) -> &str {
        "explicit_seven"
    }

    fn evaluate(&self, ctx: &VerseContext) -> Option<PatternHit> {
        let mentions = self.word.find_iter(ctx.text).count();
        if mentions == 0 {
            return None;
        }
        Some(PatternHit::new(
            ctx.record.reference(),
            format!("{} mention(s) of \"seven\"", mentions),
        ))
    }
}
