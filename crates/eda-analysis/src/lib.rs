//! Exploratory analysis of a train/test passenger dataset
//!
//! This crate loads the two delimited-text files of a labelled dataset, merges
//! them into one immutable working dataset, and computes the descriptive
//! tables an analyst looks at first: missing values, numeric summaries,
//! category frequencies, histograms, outcome rates per group and pairwise
//! correlations.
//!
//! # Overview
//!
//! The analysis system supports two main workflows:
//!
//! ## Analysis Workflow
//!
//! 1. **Load Files** ([`load::load_table`]): Parse the train and test files into tables
//! 2. **Merge** ([`session::AnalysisSession`]): Validate the column layout once and
//!    concatenate train then test records, each tagged with its origin
//! 3. **Analyze** ([`report::AnalysisReport`]): Run every aggregator over the session:
//!    - [`missing::MissingValueReport`]: missing-value rate per column
//!    - [`numeric::NumericSummary`]: mean/median/standard deviation per numeric column
//!    - [`categorical::CategoricalSummary`]: value frequencies per categorical column
//!    - [`distribution::DistributionReport`]: fixed-bin histograms
//!    - [`outcome::GroupOutcomeReport`]: survived/died counts per group
//!    - [`correlation::CorrelationTable`]: Pearson coefficients over encoded features
//!
//! ## Export Workflow
//!
//! 1. **Merge** ([`session::AnalysisSession`]): As above
//! 2. **Export** ([`export`]): Write the merged dataset as CSV, or the
//!    [`summary::Summary`] as JSON
//!
//! All behavior that depends on the dataset's column names (roles, category
//! codes, histogram bins) is configuration, see [`config::AnalysisConfig`].
//!
//! # Examples
//!
//! ```
//! use eda_analysis::{
//!     config::AnalysisConfig,
//!     load::{ParseOptions, parse_table},
//!     report::AnalysisReport,
//!     session::AnalysisSession,
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let train = "\
//! PassengerId,Survived,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked
//! 1,0,3,male,22,1,0,7.25,S
//! 2,1,1,female,38,1,0,71.2833,C
//! 3,1,3,female,,0,0,7.925,S
//! ";
//! let test = "\
//! PassengerId,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked
//! 892,3,male,34.5,0,0,7.8292,Q
//! ";
//!
//! let options = ParseOptions::default();
//! let train = parse_table(train.as_bytes(), &options)?;
//! let test = parse_table(test.as_bytes(), &options)?;
//!
//! let config = AnalysisConfig::default();
//! let session = AnalysisSession::new(config.schema.clone(), train, test)?;
//! let report = AnalysisReport::from_session(&session, &config)?;
//!
//! let age = report.missing_values.get("Age").unwrap();
//! assert_eq!(age.missing_count, 1);
//! assert_eq!(age.percentage, 25.0);
//! # Ok(())
//! # }
//! ```

pub mod categorical;
pub mod config;
pub mod correlation;
pub mod dataset;
pub mod distribution;
pub mod encoding;
pub mod export;
pub mod load;
pub mod missing;
pub mod numeric;
pub mod outcome;
pub mod report;
pub mod schema;
pub mod session;
pub mod summary;
pub mod value;

/// Failure of an aggregate computation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("dataset contains no records")]
    EmptyDataset,
    #[display("column '{column}' is not present in the dataset")]
    MissingColumn { column: String },
    #[display("histogram bounds for column '{column}' must be finite and strictly ascending")]
    InvalidHistogramBounds { column: String },
}

/// `100 * count / total`; `total` must be non-zero.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn percentage(count: usize, total: usize) -> f64 {
    debug_assert!(total > 0);
    100.0 * count as f64 / total as f64
}
