use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::{FinanzasError, Result};
use crate::importer::source_path;
use crate::pipeline::read_output;
use crate::settings::{load_settings, Settings};
use crate::sink::{BatchStatus, SinkClient};

pub fn execute(settings: &Settings, input: &Path) -> Result<()> {
    let records = read_output(input)?;
    println!("Loaded {} records from {}", records.len(), input.display());

    let client = SinkClient::from_config(&settings.sink)?;
    let report = client.insert_batches(&records, settings.sink.batch_size);

    let failed: Vec<_> = report.unsuccessful().collect();
    if !failed.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Batch", "First row", "Rows", "Status", "Detail"]);
        for b in &failed {
            let (status, detail) = match &b.status {
                BatchStatus::Failed { status, message } => (
                    status.map(|s| s.to_string()).unwrap_or_else(|| "network".to_string()),
                    message.clone(),
                ),
                BatchStatus::Skipped => ("skipped".to_string(), String::new()),
                BatchStatus::Uploaded => continue,
            };
            table.add_row(vec![
                Cell::new(b.index),
                Cell::new(b.offset + 1),
                Cell::new(b.rows),
                Cell::new(status),
                Cell::new(detail),
            ]);
        }
        println!("{}\n{table}", "Failed batches".red().bold());
    }

    println!("Uploaded {}/{} records", report.uploaded(), report.total);
    if !report.is_complete() {
        return Err(FinanzasError::Other(format!(
            "{} records not uploaded",
            report.total - report.uploaded()
        )));
    }
    Ok(())
}

pub fn run(input: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let path = source_path(input.unwrap_or(&settings.output_path));
    execute(&settings, &path)
}
