use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::reports::find_duplicates;
use crate::settings::load_settings;
use crate::sink::SinkClient;

fn client() -> Result<SinkClient> {
    SinkClient::from_config(&load_settings().sink)
}

pub fn count() -> Result<()> {
    let rows = client()?.fetch_all()?;
    println!("{} records in the remote table", rows.len());
    if rows.is_empty() {
        println!("{}", "If records were uploaded, check the table's read policy.".yellow());
    }
    Ok(())
}

pub fn duplicates() -> Result<()> {
    let rows = client()?.fetch_all()?;
    let report = find_duplicates(&rows);
    println!("{} records in the remote table", report.total_rows);

    if report.groups.is_empty() {
        println!("{}", "No duplicates found".green());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Amount", "Detail", "Category", "Copies", "IDs"]);
    for g in &report.groups {
        table.add_row(vec![
            Cell::new(&g.date),
            Cell::new(money(g.amount)),
            Cell::new(&g.merchant_text),
            Cell::new(&g.category),
            Cell::new(g.ids.len()),
            Cell::new(g.ids.join(", ")),
        ]);
    }
    println!("Duplicate groups\n{table}");
    println!(
        "{} groups, {} surplus records",
        report.groups.len(),
        report.surplus().to_string().yellow().bold()
    );
    Ok(())
}

pub fn purge(yes: bool) -> Result<()> {
    let client = client()?;
    if !yes {
        let found = client.fetch_all()?.len();
        println!("{found} records would be deleted. Re-run with --yes to delete them.");
        return Ok(());
    }
    let report = client.purge()?;
    println!("Deleted {}/{} records", report.deleted, report.found);
    Ok(())
}
