use crate::percentiles::Percentiles;

/// Five-number summary with Tukey whiskers, as drawn by a box plot.
///
/// Quartiles use linearly interpolated percentiles. Whiskers extend to the most
/// extreme data points within [`BoxPlotStats::WHISKER_IQR_FACTOR`] × IQR of the
/// box; anything beyond them is an outlier.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotStats {
    /// First quartile (P25).
    pub q1: f64,
    /// Median (P50).
    pub median: f64,
    /// Third quartile (P75).
    pub q3: f64,
    /// Interquartile range, `q3 - q1`.
    pub iqr: f64,
    /// Smallest value not below `q1 - 1.5 * iqr`.
    pub lower_whisker: f64,
    /// Largest value not above `q3 + 1.5 * iqr`.
    pub upper_whisker: f64,
    /// Values beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxPlotStats {
    pub const WHISKER_IQR_FACTOR: f64 = 1.5;
    const QUARTILE_POINTS: [f64; 3] = [25.0, 50.0, 75.0];

    /// Computes box-plot statistics from unsorted values.
    ///
    /// Returns `None` if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use perfcmp_stats::boxplot::BoxPlotStats;
    /// let stats = BoxPlotStats::new([9.0, 1.0, 8.0, 2.0, 7.0, 3.0, 6.0, 4.0, 5.0]).unwrap();
    /// assert_eq!((stats.q1, stats.median, stats.q3), (3.0, 5.0, 7.0));
    /// assert_eq!((stats.lower_whisker, stats.upper_whisker), (1.0, 9.0));
    /// assert!(stats.outliers.is_empty());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes box-plot statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        let quartiles = Percentiles::from_sorted(sorted_values, &Self::QUARTILE_POINTS);
        if sorted_values.is_empty() {
            return None;
        }

        let q1 = quartiles.get(25.0)?;
        let median = quartiles.get(50.0)?;
        let q3 = quartiles.get(75.0)?;
        let iqr = q3 - q1;
        let low_fence = q1 - Self::WHISKER_IQR_FACTOR * iqr;
        let high_fence = q3 + Self::WHISKER_IQR_FACTOR * iqr;

        let fences = low_fence..=high_fence;
        let inside = || sorted_values.iter().copied().filter(|v| fences.contains(v));
        // The quartiles lie within the data, so at least one value is inside the fences.
        let lower_whisker = inside().next().unwrap_or(q1);
        let upper_whisker = inside().last().unwrap_or(q3);
        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|v| !fences.contains(v))
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            iqr,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}
