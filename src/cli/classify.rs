use comfy_table::{Cell, Table};

use crate::cli::load_classifier;
use crate::error::Result;
use crate::settings::load_settings;

pub fn run(merchants: &[String]) -> Result<()> {
    let classifier = load_classifier(&load_settings())?;

    let mut table = Table::new();
    table.set_header(vec!["Merchant", "Category"]);
    for merchant in merchants {
        table.add_row(vec![Cell::new(merchant), Cell::new(classifier.classify(merchant))]);
    }
    println!("{table}");
    Ok(())
}
