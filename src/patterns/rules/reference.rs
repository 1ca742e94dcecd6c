use crate::patterns::rule::{PatternHit, PatternRule, VerseContext};

/// Chapter or verse numbers that are multiples of 7.
pub struct ReferenceNumberRule;

impl PatternRule for ReferenceNumberRule {
    fn name(&self) -> &str {
        "reference_sevens"
    }

    fn evaluate(&self, ctx: &VerseContext) -> Option<PatternHit> {
        let mut parts = Vec::new();
        if ctx.record.chapter % 7 == 0 {
            parts.push(format!("chapter {} (7x{})", ctx.record.chapter, ctx.record.chapter / 7));
        }
        if ctx.record.verse % 7 == 0 {
            parts.push(format!("verse {} (7x{})", ctx.record.verse, ctx.record.verse / 7));
        }

        if parts.is_empty() {
            return None;
        }
        Some(PatternHit::new(ctx.record.reference(), parts.join(", ")))
    }
}
