use std::path::PathBuf;

use clap::{Args, ValueEnum};
use lifedash_core::{export_rows, to_csv, ExportDocument, Profile};

use super::common::InputArgs;

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Flat table: Activity, Time Spent (hrs), Time Remaining (hrs)
    Csv,
    /// Nested document: time_spent, time_future, categories
    Json,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,
    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let profile = Profile::load_or_default();
    let request = args.input.to_request(&profile)?;
    let result = request.compute()?;

    let data = match args.format {
        ExportFormat::Csv => to_csv(&export_rows(&result)),
        ExportFormat::Json => ExportDocument::from_result(&result).to_json_pretty()?,
    };

    match args.output {
        Some(path) => std::fs::write(path, data)?,
        None => print!("{data}"),
    }
    Ok(())
}
