//! Analysis report command
//!
//! Loads and merges the input files, runs every analysis and prints the
//! results as text tables in the order an analyst reads them: overview,
//! preview, data quality, distributions, outcome breakdowns, correlations.

mod table;

use anyhow::Context;
use clap::{Args, ValueEnum};
use eda_analysis::{config::CorrelationShape, report::AnalysisReport};

use crate::{command::InputArg, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    #[clap(flatten)]
    pub input: InputArg,

    /// Number of records to show in the data preview
    #[arg(long, default_value_t = 5)]
    pub preview: usize,

    /// Correlation output shape (overrides the configuration)
    #[arg(long, value_enum)]
    pub correlation: Option<CorrelationArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CorrelationArg {
    /// Full symmetric matrix
    Full,
    /// Each feature against the outcome only
    Outcome,
}

impl From<CorrelationArg> for CorrelationShape {
    fn from(arg: CorrelationArg) -> Self {
        match arg {
            CorrelationArg::Full => CorrelationShape::Full,
            CorrelationArg::Outcome => CorrelationShape::OutcomeOnly,
        }
    }
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let mut config = util::read_config_file(arg.input.config.as_deref())?;
    if let Some(shape) = arg.correlation {
        config.correlation_shape = shape.into();
    }
    let session = util::load_session(
        &arg.input.train,
        &arg.input.test,
        &arg.input.parse_options()?,
        &config,
    )?;
    let report =
        AnalysisReport::from_session(&session, &config).context("Failed to analyze dataset")?;

    println!("Passenger Dataset Analysis");
    println!("==========================\n");

    table::print_overview(&report.info);
    println!();

    println!("Data Preview (first {} records)", arg.preview);
    table::print_preview(session.dataset().columns(), session.dataset().preview(arg.preview));
    println!();

    println!("Missing Values");
    table::print_missing_values(&report.missing_values);
    println!();

    println!("Numeric Statistics");
    table::print_numeric_summary(&report.numeric);
    println!();

    for frequencies in &report.categorical.tables {
        println!("Distribution of {}", frequencies.column);
        table::print_frequency_table(frequencies);
        println!();
    }

    for histogram in &report.distributions.histograms {
        println!(
            "Histogram of {} ({} values)",
            histogram.column, histogram.value_count
        );
        table::print_histogram(&histogram.histogram);
        println!();
    }

    for group in &report.outcome_groups {
        println!("Survival by {}", group.column);
        table::print_outcome_table(&group.column, &group.report);
        println!();
    }

    println!(
        "Correlations (train records with complete features: {})",
        report.correlation.sample_size()
    );
    table::print_correlation(&report.correlation);

    Ok(())
}
