use crate::patterns::rule::{PatternHit, PatternRule, VerseContext};

/// Verses whose own character count or word count is a multiple of 7.
pub struct LengthCoincidenceRule;

impl PatternRule for LengthCoincidenceRule {
    fn name(&self) -> &str {
        "length_coincidence"
    }

    fn evaluate(&self, ctx: &VerseContext) -> Option<PatternHit> {
        let chars = ctx.text.chars().count();
        let words = ctx.text.split_whitespace().count();

        let mut parts = Vec::new();
        if chars > 0 && chars % 7 == 0 {
            parts.push(format!("{} characters (7x{})", chars, chars / 7));
        }
        if words > 0 && words % 7 == 0 {
            parts.push(format!("{} words (7x{})", words, words / 7));
        }

        if parts.is_empty() {
            return None;
        }
        Some(PatternHit::new(ctx.record.reference(), parts.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::VerseRecord;

    fn context_hit(text: &str) -> Option<PatternHit> {
        let record = VerseRecord::new("John", 11, 35, text);
        let ctx = VerseContext {
            record: &record,
            text,
            tokens: &[],
            position: 1,
        };
        LengthCoincidenceRule.evaluate(&ctx)
    }

    #[test]
    fn forty_nine_characters_count() {
        // 49 characters exactly.
        let text = "a".repeat(49);
        let hit = context_hit(&text).unwrap();
        assert!(hit.detail.contains("49 characters (7x7)"));
    }

    #[test]
    fn seven_words_count() {
        let hit = context_hit("one two three four five six seven").unwrap();
        assert!(hit.detail.contains("7 words (7x1)"));
    }

    #[test]
    fn other_lengths_do_not() {
        assert!(context_hit("ab").is_none());
    }
}
