use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::load_classifier;
use crate::error::Result;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let classifier = load_classifier(&settings)?;

    let mut table = Table::new();
    table.set_header(vec!["#", "Category", "Aliases"]);
    for (i, (name, count)) in classifier.catalog_summary().into_iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(name), Cell::new(count)]);
    }

    let origin = settings.catalog_path.as_deref().unwrap_or("built-in");
    println!("Catalog ({origin})\n{table}");
    println!(
        "{} aliases, {} fallback keywords",
        classifier.alias_count().to_string().bold(),
        classifier.keyword_count().to_string().bold()
    );
    Ok(())
}
