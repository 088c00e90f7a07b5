//! Export commands
//!
//! Both commands load and merge the input files, then write one export to
//! the given file or to stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use eda_analysis::export;

use crate::{
    command::InputArg,
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct ExportArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Output file (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run_csv(arg: &ExportArg) -> anyhow::Result<()> {
    let config = util::read_config_file(arg.input.config.as_deref())?;
    let session = util::load_session(
        &arg.input.train,
        &arg.input.test,
        &arg.input.parse_options()?,
        &config,
    )?;

    let mut output = Output::from_output_path(arg.output.as_deref())?;
    export::write_dataset_csv(session.dataset(), &mut output)
        .with_context(|| format!("Failed to export CSV to {}", output.display_path()))?;
    log::info!(
        "Exported {} records to {}",
        session.dataset().len(),
        output.display_path()
    );
    Ok(())
}

pub(crate) fn run_json(arg: &ExportArg) -> anyhow::Result<()> {
    let config = util::read_config_file(arg.input.config.as_deref())?;
    let session = util::load_session(
        &arg.input.train,
        &arg.input.test,
        &arg.input.parse_options()?,
        &config,
    )?;

    let mut output = Output::from_output_path(arg.output.as_deref())?;
    export::write_summary_json(&session, &mut output)
        .with_context(|| format!("Failed to export JSON summary to {}", output.display_path()))?;
    log::info!("Exported summary to {}", output.display_path());
    Ok(())
}
