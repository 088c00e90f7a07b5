//! Statistical primitives for the exploratory data analysis engine.
//!
//! This crate provides the small set of numeric building blocks the analysis
//! layer is assembled from:
//!
//! - **Descriptive statistics**: mean, median, population standard deviation
//! - **Correlation**: Pearson product-moment coefficient with a zero-variance policy
//! - **Histogram generation**: frequency counts over fixed, caller-supplied bin bounds
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing a column of numbers
//! - [`correlation`]: Pairwise linear correlation
//! - [`histogram`]: Histogram construction over fixed upper bounds
//!
//! All functions operate on values that are already known to be present.
//! Filtering out missing values is the caller's job.
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use eda_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Computing a correlation coefficient
//!
//! ```
//! use eda_stats::correlation::pearson_correlation;
//!
//! let x = [1.0, 2.0, 3.0, 4.0];
//! let y = [2.0, 4.0, 6.0, 8.0];
//! assert_eq!(pearson_correlation(&x, &y), 1.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use eda_stats::histogram::Histogram;
//!
//! let ages = [4.0, 18.0, 25.0, 80.0];
//! let histogram = Histogram::with_upper_bounds(ages, &[10.0, 20.0, 30.0]);
//! assert_eq!(histogram.total_count(), 4);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod histogram;

/// Error returned when a statistic is requested for an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot compute a statistic over an empty sequence")]
pub struct EmptyInputError;
