//! Fixed-bin histograms for numeric columns

use eda_stats::histogram::Histogram;

use crate::{AnalysisError, config::HistogramSpec, dataset::DatasetView};

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionReport {
    pub histograms: Vec<ColumnHistogram>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHistogram {
    pub column: String,
    /// Number of values with a numeric reading; equals the histogram's total.
    pub value_count: usize,
    pub histogram: Histogram,
}

impl DistributionReport {
    /// Bins each configured column's numeric values.
    pub fn from_dataset(
        view: DatasetView<'_>,
        specs: &[HistogramSpec],
    ) -> Result<Self, AnalysisError> {
        let histograms = specs
            .iter()
            .map(|spec| {
                let index = view.require_column(&spec.column)?;
                let bounds = &spec.upper_bounds;
                if !bounds.iter().all(|b| b.is_finite()) || !bounds.is_sorted_by(|a, b| a < b) {
                    return Err(AnalysisError::InvalidHistogramBounds {
                        column: spec.column.clone(),
                    });
                }
                let values = view
                    .values(index)
                    .filter_map(|v| v.as_number())
                    .collect::<Vec<_>>();
                Ok(ColumnHistogram {
                    column: spec.column.clone(),
                    value_count: values.len(),
                    histogram: Histogram::with_upper_bounds(values, bounds),
                })
            })
            .collect::<Result<_, AnalysisError>>()?;
        Ok(Self { histograms })
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&ColumnHistogram> {
        self.histograms.iter().find(|h| h.column == column)
    }
}
