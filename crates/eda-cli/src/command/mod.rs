use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eda_analysis::load::ParseOptions;

use self::{analyze::AnalyzeArg, export::ExportArg};

mod analyze;
mod export;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print every analysis of the merged dataset
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Write the merged dataset as CSV
    ExportCsv(#[clap(flatten)] ExportArg),
    /// Write the dataset summary as JSON
    ExportJson(#[clap(flatten)] ExportArg),
}

/// Input files and how to read them; shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Path to the train file (with outcome column)
    pub train: PathBuf,

    /// Path to the test file (without outcome column)
    pub test: PathBuf,

    /// Field delimiter of both input files
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Analysis configuration JSON file (defaults to the passenger dataset)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl InputArg {
    pub(crate) fn parse_options(&self) -> anyhow::Result<ParseOptions> {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                anyhow::anyhow!("Delimiter must be a single ASCII character: {:?}", self.delimiter)
            })?;
        Ok(ParseOptions {
            delimiter,
            ..ParseOptions::default()
        })
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::ExportCsv(arg) => export::run_csv(&arg)?,
        Mode::ExportJson(arg) => export::run_json(&arg)?,
    }
    Ok(())
}
