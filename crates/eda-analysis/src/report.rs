//! Every analysis of a session, bundled

use crate::{
    AnalysisError,
    categorical::CategoricalSummary,
    config::AnalysisConfig,
    correlation::CorrelationTable,
    distribution::DistributionReport,
    missing::MissingValueReport,
    numeric::NumericSummary,
    outcome::GroupOutcomeReport,
    session::{AnalysisSession, DatasetInfo},
};

/// Outcome counts grouped by one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnOutcomeReport {
    pub column: String,
    pub report: GroupOutcomeReport<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub info: DatasetInfo,
    pub missing_values: MissingValueReport,
    pub numeric: NumericSummary,
    pub categorical: CategoricalSummary,
    pub distributions: DistributionReport,
    pub outcome_groups: Vec<ColumnOutcomeReport>,
    pub correlation: CorrelationTable,
}

impl AnalysisReport {
    /// Runs every analysis over `session`, in dependency order.
    ///
    /// Stops at the first failing analysis.
    pub fn from_session(
        session: &AnalysisSession,
        config: &AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        let all = session.all();
        let schema = session.schema();

        let missing_values = MissingValueReport::from_dataset(all, schema)?;
        let numeric = NumericSummary::from_dataset(all, schema)?;
        let categorical = CategoricalSummary::from_dataset(all, schema)?;
        let distributions = DistributionReport::from_dataset(all, &config.histograms)?;
        let outcome_groups = schema
            .outcome_groups
            .iter()
            .map(|column| {
                Ok(ColumnOutcomeReport {
                    column: column.clone(),
                    report: GroupOutcomeReport::by_column(session, column)?,
                })
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;
        let correlation =
            CorrelationTable::from_session(session, &config.encoding, config.correlation_shape)?;
        log::debug!(
            "analysis complete: {} records, correlation sample of {}",
            all.len(),
            correlation.sample_size()
        );

        Ok(Self {
            info: session.info(),
            missing_values,
            numeric,
            categorical,
            distributions,
            outcome_groups,
            correlation,
        })
    }
}
