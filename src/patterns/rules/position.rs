use crate::patterns::rule::{PatternHit, PatternRule, VerseContext};

/// Every 7th passage within the match set.
pub struct PositionRule;

impl PatternRule for PositionRule {
    fn name(&self) -> &str {
        "position_sevens"
    }

    fn evaluate(&self, ctx: &VerseContext) -> Option<PatternHit> {
        if ctx.position == 0 || ctx.position % 7 != 0 {
            return None;
        }
        Some(PatternHit::new(
            ctx.record.reference(),
            format!("position {} (7x{})", ctx.position, ctx.position / 7),
        ))
    }
}
