//! Pearson correlations over encoded features
//!
//! The correlation features are the schema's feature columns followed by the
//! outcome column. Columns with an entry in the [`CategoryEncoding`] are
//! mapped to their numeric codes; every other feature must have a numeric
//! reading. Only train records are used (the test file has no outcome), and
//! a record is dropped entirely if any non-encoded feature lacks a number,
//! so all coefficients are computed over the same sample.
//!
//! Two output shapes are available (see [`CorrelationShape`]):
//!
//! - [`CorrelationMatrix`]: the full symmetric matrix
//! - [`OutcomeCorrelations`]: one coefficient per feature against the outcome

use eda_stats::correlation::pearson_correlation;

use crate::{
    AnalysisError,
    config::CorrelationShape,
    dataset::DatasetView,
    encoding::{CategoryEncoding, ColumnEncoding},
    session::AnalysisSession,
};

/// Encoded, row-filtered feature columns.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatures {
    /// Feature names; the last one is the outcome.
    pub names: Vec<String>,
    /// One series per feature, all of the same length.
    pub series: Vec<Vec<f64>>,
}

impl EncodedFeatures {
    pub fn from_view(
        view: DatasetView<'_>,
        features: &[&str],
        encoding: &CategoryEncoding,
    ) -> Result<Self, AnalysisError> {
        let columns = features
            .iter()
            .map(|&name| Ok((view.require_column(name)?, encoding.get(name))))
            .collect::<Result<Vec<(usize, Option<&ColumnEncoding>)>, AnalysisError>>()?;

        let mut series = vec![Vec::with_capacity(view.len()); features.len()];
        let mut dropped = 0;
        'records: for record in view.records() {
            let mut row = Vec::with_capacity(columns.len());
            for &(index, column_encoding) in &columns {
                let value = record.get(index);
                let number = match (column_encoding, value) {
                    (Some(column_encoding), Some(value)) => Some(column_encoding.encode(value)),
                    (Some(column_encoding), None) => Some(column_encoding.fallback),
                    (None, value) => value.and_then(|v| v.as_number()),
                };
                let Some(number) = number else {
                    dropped += 1;
                    continue 'records;
                };
                row.push(number);
            }
            for (s, x) in series.iter_mut().zip(row) {
                s.push(x);
            }
        }

        log::debug!(
            "correlation sample: {} records kept, {dropped} dropped for missing values",
            view.len() - dropped
        );
        Ok(Self {
            names: features.iter().map(|&s| s.to_owned()).collect(),
            series,
        })
    }

    /// Number of records in the sample.
    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }
}

/// Symmetric matrix of Pearson coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub features: Vec<String>,
    pub sample_size: usize,
    /// Row-major `features.len() × features.len()` coefficients.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Computes every pair once and mirrors it; the diagonal is 1.
    #[must_use]
    pub fn from_features(features: &EncodedFeatures) -> Self {
        let n = features.names.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            values[i][i] = 1.0;
            for j in (i + 1)..n {
                let r = pearson_correlation(&features.series[i], &features.series[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }
        Self {
            features: features.names.clone(),
            sample_size: features.sample_size(),
            values,
        }
    }

    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.features.iter().position(|f| f == a)?;
        let j = self.features.iter().position(|f| f == b)?;
        Some(self.values[i][j])
    }
}

/// Coefficient of each feature against the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeCorrelations {
    pub outcome: String,
    pub sample_size: usize,
    /// `(feature, r)` pairs in feature order, excluding the outcome itself.
    pub entries: Vec<(String, f64)>,
}

impl OutcomeCorrelations {
    /// The last feature of `features` is taken as the outcome.
    #[must_use]
    pub fn from_features(features: &EncodedFeatures) -> Self {
        let Some((outcome_series, feature_series)) = features.series.split_last() else {
            return Self {
                outcome: String::new(),
                sample_size: 0,
                entries: vec![],
            };
        };
        let entries = features
            .names
            .iter()
            .zip(feature_series)
            .map(|(name, series)| (name.clone(), pearson_correlation(series, outcome_series)))
            .collect();
        Self {
            outcome: features.names.last().cloned().unwrap_or_default(),
            sample_size: features.sample_size(),
            entries,
        }
    }

    #[must_use]
    pub fn get(&self, feature: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == feature)
            .map(|&(_, r)| r)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CorrelationTable {
    Matrix(CorrelationMatrix),
    OutcomeVector(OutcomeCorrelations),
}

impl CorrelationTable {
    /// Correlates the session's train records in the requested shape.
    pub fn from_session(
        session: &AnalysisSession,
        encoding: &CategoryEncoding,
        shape: CorrelationShape,
    ) -> Result<Self, AnalysisError> {
        let names = session.schema().correlation_features().collect::<Vec<_>>();
        let features = EncodedFeatures::from_view(session.train(), &names, encoding)?;
        Ok(match shape {
            CorrelationShape::Full => Self::Matrix(CorrelationMatrix::from_features(&features)),
            CorrelationShape::OutcomeOnly => {
                Self::OutcomeVector(OutcomeCorrelations::from_features(&features))
            }
        })
    }

    #[must_use]
    pub fn sample_size(&self) -> usize {
        match self {
            Self::Matrix(m) => m.sample_size,
            Self::OutcomeVector(v) => v.sample_size,
        }
    }
}
