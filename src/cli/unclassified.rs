use comfy_table::{Cell, Table};

use crate::cli::{load_classifier, run_pipeline, SourceArgs};
use crate::error::Result;
use crate::reports::unclassified_merchants;
use crate::settings::load_settings;

pub fn run(sources: &SourceArgs, limit: usize) -> Result<()> {
    let settings = load_settings();
    let classifier = load_classifier(&settings)?;
    let result = run_pipeline(&settings, sources, &classifier);

    let merchants = unclassified_merchants(&result.transactions, &classifier, limit);
    if merchants.is_empty() {
        println!("Every merchant is categorized.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Count", "Merchant"]);
    for m in &merchants {
        table.add_row(vec![Cell::new(m.count), Cell::new(&m.merchant)]);
    }
    println!("Top unclassified merchants\n{table}");
    Ok(())
}
