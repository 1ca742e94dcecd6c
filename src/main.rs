use std::env;
use std::path::{Path, PathBuf};
use std::process;

use versedex::core::analytics::VerseAnalytics;
use versedex::core::error::Result;
use versedex::corpus::loader::CorpusLoader;
use versedex::query::parser::QueryParser;
use versedex::report::writer::ReportWriter;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("usage: versedex <bible.json> <chapter> <verse> [output-dir]");
        process::exit(2);
    }

    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let query = QueryParser::new().parse_pair(&args[1], &args[2])?;

    let loaded = CorpusLoader::load_path(Path::new(&args[0]))?;
    println!(
        "Loaded {} verses across {} books ({} malformed entries skipped)",
        loaded.store.len(),
        loaded.store.book_count(),
        loaded.skipped
    );

    let analytics = VerseAnalytics::new(loaded.store);
    let report = analytics.analyze(&query);

    if report.total_matches == 0 {
        println!("No passages found for {}", query);
        return Ok(());
    }

    print!("{}", ReportWriter::render_summary(&report));

    let output_dir = args.get(3).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let written = ReportWriter::new(output_dir).write(&report)?;
    println!("Passages saved to: {}", written.passages.display());
    println!("Analytics saved to: {}", written.analytics.display());
    println!("Summary saved to: {}", written.summary.display());

    Ok(())
}
