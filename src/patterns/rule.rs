use serde::{Serialize, Deserialize};

use crate::analysis::token::Token;
use crate::core::types::VerseRecord;

/// Per-verse view handed to each pattern rule.
///
/// `text` has annotations stripped, `tokens` come from the standard
/// analyzer, and `position` is the verse's 1-based index in the match set.
pub struct VerseContext<'a> {
    pub record: &'a VerseRecord,
    pub text: &'a str,
    pub tokens: &'a [Token],
    pub position: usize,
}

/// One verse satisfying a rule, with a human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternHit {
    pub reference: String,
    pub detail: String,
}

impl PatternHit {
    pub fn new(reference: String, detail: String) -> Self {
        PatternHit { reference, detail }
    }
}

/// A number-7 pattern predicate, evaluated independently per verse.
///
/// Rules are cumulative: a verse may satisfy several rules at once, but
/// each rule reports it at most once (multiple matches within one verse go
/// into the hit detail).
pub trait PatternRule: Send + Sync {
    fn name(&self) -> &str;

    fn evaluate(&self, ctx: &VerseContext) -> Option<PatternHit>;
}
