use crate::EmptyInputError;

/// Descriptive statistics summarizing a column of numbers.
///
/// This structure contains common measures of central tendency and
/// dispersion for a dataset of `f64` values. Dispersion is measured as the
/// population variance (divisor `n`).
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values summarized.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The lower-middle value of the dataset (see [`median`]).
    pub median: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values will be collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use eda_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let mean = mean(sorted_values).ok()?;
        let median = sorted_values[lower_middle_index(sorted_values.len())];
        let std_dev = std_dev(sorted_values, mean).ok()?;

        Some(Self {
            count: sorted_values.len(),
            min,
            max,
            mean,
            median,
            variance: std_dev * std_dev,
            std_dev,
        })
    }
}

/// Computes the arithmetic mean.
///
/// Missing values must be filtered out by the caller; an empty sequence is
/// reported as [`EmptyInputError`] rather than producing `NaN`.
///
/// # Examples
///
/// ```
/// # use eda_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 6.0]), Ok(3.0));
/// assert!(mean(&[]).is_err());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Result<f64, EmptyInputError> {
    if values.is_empty() {
        return Err(EmptyInputError);
    }
    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        return Ok(sum / n);
    }
    // The running sum overflowed; dividing first keeps finite input finite.
    Ok(values.iter().map(|v| v / n).sum())
}

/// Computes the median using lower-middle indexing.
///
/// The values are sorted in a copy; the input is left untouched. For odd
/// lengths this is the middle element. For even lengths it is the lower of
/// the two middle elements, not their average.
///
/// # Examples
///
/// ```
/// # use eda_stats::descriptive::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.0));
/// ```
pub fn median(values: &[f64]) -> Result<f64, EmptyInputError> {
    if values.is_empty() {
        return Err(EmptyInputError);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted[lower_middle_index(sorted.len())])
}

fn lower_middle_index(len: usize) -> usize {
    (len - 1) / 2
}

/// Computes the population standard deviation (divisor `n`) around `mean`.
///
/// Returns exactly `0.0` when every value is identical, even if `mean` carries
/// summation rounding.
///
/// # Examples
///
/// ```
/// # use eda_stats::descriptive::std_dev;
/// assert_eq!(std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 5.0), Ok(2.0));
/// assert_eq!(std_dev(&[0.1, 0.1, 0.1], 0.1), Ok(0.0));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn std_dev(values: &[f64], mean: f64) -> Result<f64, EmptyInputError> {
    let (&first, rest) = values.split_first().ok_or(EmptyInputError)?;
    if rest.iter().all(|&v| v == first) {
        return Ok(0.0);
    }
    let n = values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    if variance.is_finite() {
        return Ok(variance.sqrt());
    }
    // Squared deviations overflowed; compute on values scaled into [-1, 1].
    let scale = values.iter().fold(mean.abs(), |acc, v| acc.max(v.abs()));
    let scaled = values
        .iter()
        .map(|v| (v / scale - mean / scale).powi(2))
        .sum::<f64>()
        / n;
    Ok(scale * scaled.sqrt())
}
