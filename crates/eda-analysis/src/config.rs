//! Analysis configuration
//!
//! Everything the engine needs to know about the dataset beyond the data
//! itself: column roles, category encodings, histogram bins and the shape of
//! the correlation output. All fields have passenger-dataset defaults, so a
//! configuration file only has to list what it changes:
//!
//! ```json
//! {
//!   "histograms": [{ "column": "Age", "upper_bounds": [18, 65] }],
//!   "correlation_shape": "outcome_only"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{encoding::CategoryEncoding, schema::Schema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub schema: Schema,
    pub encoding: CategoryEncoding,
    pub histograms: Vec<HistogramSpec>,
    pub correlation_shape: CorrelationShape,
}

/// Fixed bins for one column's histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSpec {
    pub column: String,
    /// Strictly ascending inclusive upper bounds; an overflow bin is implied.
    pub upper_bounds: Vec<f64>,
}

/// Which correlation output to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationShape {
    /// Symmetric matrix over all correlation features.
    #[default]
    Full,
    /// One coefficient per feature against the outcome.
    OutcomeOnly,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            schema: Schema::default(),
            encoding: CategoryEncoding::default(),
            histograms: vec![
                HistogramSpec {
                    column: "Age".to_owned(),
                    upper_bounds: vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0],
                },
                HistogramSpec {
                    column: "Fare".to_owned(),
                    upper_bounds: vec![10.0, 20.0, 30.0, 40.0, 50.0, 100.0],
                },
            ],
            correlation_shape: CorrelationShape::default(),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("unsupported category encoding version {found} (supported: {supported})")]
    UnsupportedEncodingVersion { found: u32, supported: u32 },
    #[display("histogram bounds for column '{column}' must be finite and strictly ascending")]
    InvalidHistogramBounds { column: String },
    #[display("encoded column '{column}' is not a feature column")]
    UnknownEncodedColumn { column: String },
}

impl AnalysisConfig {
    /// Checks the parts of the configuration that deserialization cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.encoding.version != CategoryEncoding::VERSION {
            return Err(ConfigError::UnsupportedEncodingVersion {
                found: self.encoding.version,
                supported: CategoryEncoding::VERSION,
            });
        }
        for spec in &self.histograms {
            let finite = spec.upper_bounds.iter().all(|b| b.is_finite());
            if !finite || !spec.upper_bounds.is_sorted_by(|a, b| a < b) {
                return Err(ConfigError::InvalidHistogramBounds {
                    column: spec.column.clone(),
                });
            }
        }
        if let Some(column) = self
            .encoding
            .columns
            .keys()
            .find(|c| !self.schema.features.contains(c))
        {
            return Err(ConfigError::UnknownEncodedColumn {
                column: column.clone(),
            });
        }
        Ok(())
    }
}
