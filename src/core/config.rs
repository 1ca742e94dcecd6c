/// Tuning knobs for the statistics aggregator and report shape.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub top_words: usize,            // entries in the word-frequency view
    pub top_chars: usize,            // entries in the character-frequency view
    pub percentile_ladder: Vec<u8>,  // percentile ranks reported for length series
    pub strip_bracketed: bool,       // drop [editorial] text before any counting
    pub patterns: PatternConfig,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            top_words: 15,
            top_chars: 10,
            percentile_ladder: vec![25, 50, 75, 90],
            strip_bracketed: true,
            patterns: PatternConfig::default(),
        }
    }
}

/// Per-rule toggles and term lists for the number-7 pattern analyzer.
///
/// The vocabulary and ordinal lists are explicit configuration so the
/// analyzer stays a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct PatternConfig {
    pub explicit_mentions: bool,
    pub divisible_numbers: bool,
    pub vocabulary_terms: bool,
    pub ordinal_forms: bool,
    pub length_coincidence: bool,
    pub reference_numbers: bool,
    pub position_multiples: bool,

    /// Single-token terms counted by the vocabulary rule.
    pub vocabulary: Vec<String>,
    /// Ordinal forms of multiples of seven, matched whole-word.
    pub ordinals: Vec<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfig {
            explicit_mentions: true,
            divisible_numbers: true,
            vocabulary_terms: true,
            ordinal_forms: true,
            length_coincidence: true,
            reference_numbers: true,
            position_multiples: true,
            vocabulary: vec![
                "sabbath".to_string(),
                "sevenfold".to_string(),
                "heptad".to_string(),
                "week".to_string(),
                "rest".to_string(),
            ],
            ordinals: vec![
                "seventh".to_string(),
                "fourteenth".to_string(),
                "twenty-first".to_string(),
                "twenty-eighth".to_string(),
                "thirty-fifth".to_string(),
                "forty-second".to_string(),
                "forty-ninth".to_string(),
                "fifty-sixth".to_string(),
                "sixty-third".to_string(),
                "seventieth".to_string(),
                "seventy-seventh".to_string(),
            ],
        }
    }
}
