use crate::cli::{process, upload, SourceArgs};
use crate::error::Result;
use crate::settings::load_settings;

pub fn run(sources: &SourceArgs, output: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let path = process::execute(&settings, sources, output)?;
    println!();
    upload::execute(&settings, &path)
}
