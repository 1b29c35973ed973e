use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{load_classifier, run_pipeline, SourceArgs};
use crate::error::Result;
use crate::fmt::{money, percent};
use crate::importer::source_path;
use crate::pipeline::{write_output, MergeResult};
use crate::settings::{load_settings, Settings};

/// Run the pipeline and write the JSON file. Returns the path written.
pub fn execute(settings: &Settings, sources: &SourceArgs, output: Option<&str>) -> Result<PathBuf> {
    let classifier = load_classifier(settings)?;
    let result = run_pipeline(settings, sources, &classifier);

    let out_path = source_path(output.unwrap_or(&settings.output_path));
    let checksum = write_output(&out_path, &result.transactions)?;

    print_summary(&result);
    println!(
        "Wrote {} records to {} (sha256 {})",
        result.transactions.len(),
        out_path.display(),
        &checksum[..12]
    );
    Ok(out_path)
}

pub fn run(sources: &SourceArgs, output: Option<&str>) -> Result<()> {
    execute(&load_settings(), sources, output)?;
    Ok(())
}

fn print_summary(result: &MergeResult) {
    for s in &result.sources {
        match &s.unavailable {
            Some(reason) => println!("{} {}: {}", "warning:".yellow().bold(), s.source, reason),
            None if s.dropped > 0 => println!(
                "{}: {} records, {} rows dropped",
                s.source,
                s.records,
                s.dropped.to_string().yellow()
            ),
            None => println!("{}: {} records", s.source, s.records),
        }
    }

    if result.transactions.is_empty() {
        println!("{}", "No transactions found in any source.".yellow());
        return;
    }

    let total_value: f64 = result.transactions.iter().map(|t| t.amount).sum();
    let mut table = Table::new();
    table.set_header(vec!["Category", "Count", "%"]);
    for share in result.stats.distribution() {
        table.add_row(vec![
            Cell::new(&share.category),
            Cell::new(share.count),
            Cell::new(percent(share.pct)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(result.stats.total()),
        Cell::new(""),
    ]);
    println!("Categories\n{table}");
    println!("Total value: {}", money(total_value));
    if result.dropped() > 0 {
        println!("{} rows dropped (see log for details)", result.dropped());
    }
}
