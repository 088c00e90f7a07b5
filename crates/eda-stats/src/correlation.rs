//! Pairwise linear correlation
//!
//! Only the Pearson product-moment coefficient is provided. The analysis layer
//! encodes categorical columns to numbers before calling into this module.

/// Computes the Pearson product-moment correlation coefficient of `x` and `y`.
///
/// Series with zero variance have no defined correlation. For those, and for
/// empty input, this function returns exactly `0.0` instead of `NaN`. The result
/// is otherwise clamped to `[-1.0, 1.0]` to absorb floating-point drift.
///
/// The coefficient is symmetric: `pearson_correlation(x, y)` and
/// `pearson_correlation(y, x)` are bit-identical.
///
/// # Panics
///
/// Panics if `x` and `y` have different lengths.
///
/// # Examples
///
/// ```
/// use eda_stats::correlation::pearson_correlation;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(pearson_correlation(&x, &x), 1.0);
/// assert_eq!(pearson_correlation(&x, &[4.0, 3.0, 2.0, 1.0]), -1.0);
///
/// // Constant series: zero variance
/// assert_eq!(pearson_correlation(&[5.0, 5.0, 5.0, 5.0], &x), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "series must have the same length");

    if is_constant(x) || is_constant(y) {
        return 0.0;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        covariance += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    (covariance / denominator).clamp(-1.0, 1.0)
}

/// Empty series count as constant.
fn is_constant(values: &[f64]) -> bool {
    match values.split_first() {
        Some((&first, rest)) => rest.iter().all(|&v| v == first),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_correlation_is_one() {
        let series: [&[f64]; 3] = [
            &[1.0, 2.0, 3.0],
            &[22.0, 38.0, 26.0, 35.0, 35.0, 54.0, 2.0, 27.0],
            &[7.25, 71.2833, 7.925, 53.1, 8.05],
        ];
        for x in series {
            assert_eq!(pearson_correlation(x, x), 1.0, "{x:?}");
        }
    }

    #[test]
    fn test_constant_series_yields_zero() {
        let x = [3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0];
        assert_eq!(pearson_correlation(&x, &y), 0.0);
        assert_eq!(pearson_correlation(&y, &x), 0.0);
        assert_eq!(pearson_correlation(&x, &x), 0.0);
    }

    #[test]
    fn test_empty_and_single_value() {
        assert_eq!(pearson_correlation(&[], &[]), 0.0);
        assert_eq!(pearson_correlation(&[1.0], &[2.0]), 0.0);
    }

    #[test]
    fn test_symmetric_and_bounded() {
        let x = [3.0, 1.0, 3.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 1.0, 1.0, 0.0, 0.0];
        let xy = pearson_correlation(&x, &y);
        let yx = pearson_correlation(&y, &x);
        assert_eq!(xy.to_bits(), yx.to_bits());
        assert!((-1.0..=1.0).contains(&xy));
        assert!(xy < 0.0);
    }

    #[test]
    fn test_known_value() {
        // r = 0.8 for this textbook pair
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        assert!((pearson_correlation(&x, &y) - 0.8).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        let _ = pearson_correlation(&[1.0, 2.0], &[1.0]);
    }
}
