/// Complete versedex API demo
///
/// Demonstrates the full pipeline:
/// - Loading a corpus from JSON
/// - Parsing and validating a query
/// - Running the analysis
/// - Rendering and writing reports

use versedex::core::analytics::VerseAnalytics;
use versedex::corpus::loader::CorpusLoader;
use versedex::query::parser::QueryParser;
use versedex::report::writer::ReportWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║       versedex - Verse Analytics Demo         ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Load a small in-memory corpus
    println!("Step 1: LOAD - Reading corpus...");
    let corpus = r#"{
        "Genesis 1:3": "And God said, Let there be light: and there was light.",
        "Genesis 2:2": "And on the seventh day God ended his work which he had made; and he rested on the seventh day from all his work which he had made.",
        "Exodus 1:3": "Issachar, Zebulun, and Benjamin,",
        "Exodus 20:10": "But the seventh day is the sabbath of the LORD thy God",
        "Mark 1:3": "The voice of one crying in the wilderness, Prepare ye the way of the Lord, make his paths straight.",
        "not a reference": "this entry is skipped"
    }"#;
    let loaded = CorpusLoader::load_str(corpus)?;
    println!(
        "  Loaded {} verses, {} books, {} skipped\n",
        loaded.store.len(),
        loaded.store.book_count(),
        loaded.skipped
    );

    // Step 2: Parse the query
    println!("Step 2: QUERY - Parsing \"1:3\"...");
    let query = QueryParser::new().parse("1:3")?;
    println!("  Query: {}\n", query);

    // Step 3: Analyze
    println!("Step 3: ANALYZE - Running the pipeline...");
    let analytics = VerseAnalytics::new(loaded.store);
    let report = analytics.analyze(&query);
    println!(
        "  {} matches in {} of {} books",
        report.total_matches,
        report.books_with_match.len(),
        report.books_with_match.len() + report.books_without_match.len()
    );
    for entry in &report.stats.book_distribution {
        println!("    {}: {}", entry.book, entry.count);
    }
    println!();

    // Step 4: Pattern metrics
    println!("Step 4: PATTERNS - Number 7 rules:");
    println!("  ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for rule in &report.patterns.rules {
        println!("  {}: {}", rule.rule, rule.count);
    }
    println!();

    // Step 5: Render the summary
    println!("Step 5: REPORT - Rendered summary:");
    println!("  ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    print!("{}", ReportWriter::render_summary(&report));

    println!("\n╔════════════════════════════════════════╗");
    println!("║       Demo completed successfully      ║");
    println!("╚════════════════════════════════════════╝\n");

    Ok(())
}
