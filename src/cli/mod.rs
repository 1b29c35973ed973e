pub mod catalog;
pub mod classify;
pub mod init;
pub mod process;
pub mod remote;
pub mod sync;
pub mod unclassified;
pub mod upload;

use clap::{Args, Parser, Subcommand};

use crate::categorizer::Classifier;
use crate::error::Result;
use crate::importer::{source_path, DelimitedSource, SourceAdapter, SpreadsheetSource};
use crate::pipeline::{collect, merge, MergeResult};
use crate::settings::Settings;

#[derive(Parser)]
#[command(
    name = "finanzas",
    about = "Normalize, categorize and sync bank movements from CSV and XLSX exports."
)]
pub struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input overrides shared by the commands that read the bank exports.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Delimited export (default: delimited.path from settings)
    #[arg(long)]
    pub csv: Option<String>,
    /// Spreadsheet export (default: spreadsheet.path from settings)
    #[arg(long)]
    pub xlsx: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default settings file.
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
    /// Read both exports, categorize, and write the merged JSON file.
    Process {
        #[command(flatten)]
        sources: SourceArgs,
        /// Output JSON path (default: output_path from settings)
        #[arg(long)]
        output: Option<String>,
    },
    /// Upload a processed JSON file to the remote table.
    Upload {
        /// JSON file to upload (default: output_path from settings)
        #[arg(long)]
        input: Option<String>,
    },
    /// Process, then upload.
    Sync {
        #[command(flatten)]
        sources: SourceArgs,
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the category assigned to one or more merchant descriptions.
    Classify {
        /// Merchant descriptions
        #[arg(required = true)]
        merchants: Vec<String>,
    },
    /// List the most frequent merchants that fall back to "Otros".
    Unclassified {
        #[command(flatten)]
        sources: SourceArgs,
        /// Number of merchants to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Show the categories and alias counts in effect.
    Catalog,
    /// Inspect or clean the remote table.
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },
}

#[derive(Subcommand)]
pub enum RemoteCommands {
    /// Count stored records.
    Count,
    /// Report records sharing date, amount and description.
    Duplicates,
    /// Delete every stored record.
    Purge {
        /// Actually delete; without this only the count is shown
        #[arg(long)]
        yes: bool,
    },
}

pub(crate) fn load_classifier(settings: &Settings) -> Result<Classifier> {
    let path = settings.catalog_path.as_deref().map(source_path);
    Classifier::load(path.as_deref())
}

/// Run both adapters (CSV first, then XLSX) and merge their output.
pub(crate) fn run_pipeline(settings: &Settings, args: &SourceArgs, classifier: &Classifier) -> MergeResult {
    let csv = DelimitedSource::new(
        source_path(args.csv.as_deref().unwrap_or(&settings.delimited.path)),
        settings.delimited.clone(),
    );
    let xlsx = SpreadsheetSource::new(
        source_path(args.xlsx.as_deref().unwrap_or(&settings.spreadsheet.path)),
        settings.spreadsheet.clone(),
    );
    let sources: [&dyn SourceAdapter; 2] = [&csv, &xlsx];
    merge(collect(&sources, classifier))
}
