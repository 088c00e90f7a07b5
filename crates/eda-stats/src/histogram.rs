use std::fmt;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides the real line into bins delimited by a fixed,
/// ascending list of inclusive upper bounds. A value belongs to the first bin
/// whose upper bound it does not exceed. Values above the last bound fall into
/// a trailing overflow bin, so every value lands in exactly one bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins comprising the histogram, in bound order. The last bin is
    /// always the overflow bin.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
///
/// Each bin covers `(lower, upper]`. The first bin has no lower bound and the
/// overflow bin has no upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Exclusive lower bound, `None` for the first bin.
    pub lower: Option<f64>,
    /// Inclusive upper bound, `None` for the overflow bin.
    pub upper: Option<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl HistogramBin {
    /// Returns a short label for this bin, such as `≤10` or `>70`.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if `value` belongs to this bin.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above_lower = self.lower.is_none_or(|lower| value > lower);
        let below_upper = self.upper.is_none_or(|upper| value <= upper);
        above_lower && below_upper
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.upper, self.lower) {
            (Some(upper), _) => write!(f, "≤{upper}"),
            (None, Some(lower)) => write!(f, ">{lower}"),
            (None, None) => write!(f, "all"),
        }
    }
}

impl Histogram {
    /// Creates a histogram from values and a list of inclusive upper bounds.
    ///
    /// `upper_bounds.len() + 1` bins are produced. Values are neither clamped
    /// nor excluded; anything that is not `≤` some bound (including `NaN`) is
    /// counted in the overflow bin.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to bin. Order does not matter.
    /// * `upper_bounds` - Strictly ascending inclusive upper bounds.
    ///
    /// # Panics
    ///
    /// Panics if `upper_bounds` is not strictly ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eda_stats::histogram::Histogram;
    /// let fares = [7.25, 71.28, 8.05, 10.0, 512.33];
    /// let histogram = Histogram::with_upper_bounds(fares, &[10.0, 50.0, 100.0]);
    ///
    /// let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
    /// assert_eq!(counts, [3, 0, 1, 1]);
    /// assert_eq!(histogram.bins[0].label(), "≤10");
    /// assert_eq!(histogram.bins[3].label(), ">100");
    /// ```
    #[must_use]
    pub fn with_upper_bounds<I>(values: I, upper_bounds: &[f64]) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        assert!(
            upper_bounds.is_sorted_by(|a, b| a < b),
            "upper bounds must be strictly ascending"
        );

        let mut bins = Vec::with_capacity(upper_bounds.len() + 1);
        let mut lower = None;
        for &upper in upper_bounds {
            bins.push(HistogramBin {
                lower,
                upper: Some(upper),
                count: 0,
            });
            lower = Some(upper);
        }
        bins.push(HistogramBin {
            lower,
            upper: None,
            count: 0,
        });

        for value in values {
            let idx = upper_bounds
                .iter()
                .position(|&upper| value <= upper)
                .unwrap_or(upper_bounds.len());
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Returns the sum of all bin counts.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}
