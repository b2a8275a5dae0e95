use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use anyhow::{Context, Result};

use wikiday_backend::logger::set_log_level_str;
use wikiday_backend::types::DayReport;
use wikiday_backend::wiki_parse::parse;

#[derive(Parser, Debug)]
#[command(author, version, about = "Wikiday CLI", long_about = None)]
struct Cli {
    /// Path to a file holding the article wikitext, or '-' to read stdin
    input: PathBuf,

    /// Print per-bucket entry counts instead of the JSON report
    #[arg(long)]
    counts: bool,

    /// Log level: silent, error, warn, info, debug
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read the article body from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read article file: {}", path.display()))
    }
}

fn print_counts(report: &DayReport) {
    let rlg_descr_count: usize = report
        .holidays_rlg
        .iter()
        .map(|g| g.descriptions.len())
        .sum();

    println!("international holidays: {}", report.holidays_int.len());
    println!("local holidays:         {}", report.holidays_loc.len());
    println!("professional holidays:  {}", report.holidays_prof.len());
    println!(
        "religious holidays:     {} (in {} groups)",
        rlg_descr_count,
        report.holidays_rlg.len()
    );
    println!("name-days:              {}", report.name_days.len());
    println!("omens:                  {}", report.omens.len());
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        if !set_log_level_str(level) {
            eprintln!("Invalid log level: {}", level);
        }
    }

    let text = read_input(&cli.input)?;
    let report = parse(&text).context("Failed to parse the article")?;

    if cli.counts {
        print_counts(&report);
    } else {
        println!("{}", report.as_json_string()?);
    }

    Ok(())
}
