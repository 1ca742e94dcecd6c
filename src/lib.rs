pub mod core;
pub mod corpus;
pub mod analysis;
pub mod query;
pub mod stats;
pub mod patterns;
pub mod report;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                       VERSEDEX STRUCT ARCHITECTURE                       │
└──────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────── CORE ──────────────────────────────────┐
│                                                                          │
│  ┌────────────────────────────────────────────────────────────────────┐  │
│  │                       struct VerseAnalytics                        │  │
│  │  ┌──────────────────────────────────────────────────────────────┐  │  │
│  │  │ store: VerseStore            // loaded corpus, read-only     │  │  │
│  │  │ matcher: PassageMatcher      // chapter/verse filter         │  │  │
│  │  │ aggregator: StatsAggregator  // descriptive statistics       │  │  │
│  │  │ patterns: PatternAnalyzer    // number-7 rules               │  │  │
│  │  └──────────────────────────────────────────────────────────────┘  │  │
│  └────────────────────────────────────────────────────────────────────┘  │
│                                                                          │
│  ┌───────────────────────┐  ┌──────────────────┐  ┌───────────────────┐  │
│  │ struct AnalyticsConfig│  │ struct VerseRecord│ │ struct Error      │  │
│  │ • top_words/top_chars │  │ • book: String    │ │ • kind: ErrorKind │  │
│  │ • percentile_ladder   │  │ • chapter: u32    │ │ • context: String │  │
│  │ • strip_bracketed     │  │ • verse: u32      │ └───────────────────┘  │
│  │ • patterns: Pattern…  │  │ • text: String    │                        │
│  └───────────────────────┘  └──────────────────┘                         │
└──────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── PIPELINE ────────────────────────────────┐
│                                                                          │
│  CorpusLoader ──parses──> VerseStore ──verses──> PassageMatcher          │
│       │                                               │                  │
│       └─nom: "Book C:V"                               │ match set        │
│                                                       ▼                  │
│              ┌──────────────────────┬─────────────────┴───┐              │
│              ▼                      ▼                     ▼              │
│       StatsAggregator        PatternAnalyzer        (passages)           │
│              │                      │                     │              │
│       StatsSummary           PatternSummary               │              │
│              └──────────────┬───────┴─────────────────────┘              │
│                             ▼                                            │
│                       ReportBuilder ──build──> AnalysisReport            │
│                                                       │                  │
│                                                       ▼                  │
│                                                 ReportWriter             │
│                                       (passages / analytics / summary)   │
└──────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── ANALYSIS ────────────────────────────────┐
│                                                                          │
│  ┌──────────────────┐  ┌──────────────────┐  ┌────────────────────────┐  │
│  │ struct Analyzer  │  │ struct Token     │  │ trait Tokenizer        │  │
│  │ • tokenizer      │  │ • text, position │  │ • StandardTokenizer    │  │
│  │ • filters        │  │ • offset, length │  └────────────────────────┘  │
│  │ • analyze()      │  │ • token_type     │  ┌────────────────────────┐  │
│  └──────────────────┘  └──────────────────┘  │ trait TokenFilter      │  │
│  ┌───────────────────────┐                   │ • LowercaseFilter      │  │
│  │ AnnotationStripper    │                   └────────────────────────┘  │
│  │ • strip "[…]" spans   │                                               │
│  └───────────────────────┘                                               │
└──────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── PATTERNS ────────────────────────────────┐
│                                                                          │
│  trait PatternRule ── evaluate(VerseContext) -> Option<PatternHit>       │
│     • ExplicitMentionRule     \bseven\b                                  │
│     • DivisibleNumberRule     integer tokens, n % 7 == 0                 │
│     • VocabularyRule          configured seven-terms                     │
│     • OrdinalRule             seventh, fourteenth, …                     │
│     • LengthCoincidenceRule   char/word count % 7 == 0                   │
│     • ReferenceNumberRule     chapter/verse % 7 == 0                     │
│     • PositionRule            every 7th passage                          │
│                                                                          │
│  PatternAnalyzer ──rules──> RuleReport ──collects──> PatternSummary      │
└──────────────────────────────────────────────────────────────────────────┘
*/
