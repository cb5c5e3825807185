use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The range `[min, max]` is divided into bins of equal width and the values
/// falling into each bin are counted.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order.
    pub bins: Vec<HistogramBin>,
    /// Number of values that fell outside an explicit range (or were not finite).
    pub excluded: u64,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    ///
    /// The end of the last bin is nudged up by one ulp so that the maximum is included.
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Default number of bins used for distribution charts.
    pub const DEFAULT_NUM_BINS: usize = 15;

    /// Creates a histogram with `num_bins` equal-width bins.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to count.
    /// * `num_bins` - The number of bins to create.
    /// * `explicit_range` - If provided, `(min, max)` bounds used instead of the data's own
    ///   range. Values outside it are counted in [`Histogram::excluded`]. Sharing one range
    ///   between several series keeps their bins comparable.
    ///
    /// A zero-width range (all values equal) is widened to `±0.5` around the value.
    ///
    /// # Panics
    ///
    /// Panics if an explicit range has `min > max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use perfcmp_stats::histogram::Histogram;
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::new(values, 5, None);
    /// assert_eq!(histogram.bins.len(), 5);
    /// assert!(histogram.bins.iter().all(|bin| bin.count == 2));
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize, explicit_range: Option<(f64, f64)>) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if let Some((min, max)) = explicit_range {
            assert!(min <= max, "histogram range must satisfy min <= max");
        }

        let finite = || values.iter().copied().filter(|v| v.is_finite());
        if num_bins == 0 || finite().next().is_none() {
            return Self {
                bins: vec![],
                excluded: values.len() as u64,
            };
        }

        let (mut lo, mut hi) = explicit_range.unwrap_or_else(|| {
            (
                finite().fold(f64::INFINITY, f64::min),
                finite().fold(f64::NEG_INFINITY, f64::max),
            )
        });
        if hi - lo < f64::EPSILON {
            lo -= 0.5;
            hi += 0.5;
        }

        // Edges are recomputed from `lo` for every bin to avoid accumulating error.
        let span = hi - lo;
        let edge = |idx: usize| lo + span * (idx as f64) / (num_bins as f64);
        let mut bins = (0..num_bins)
            .map(|idx| HistogramBin {
                range: edge(idx)..edge(idx + 1),
                count: 0,
            })
            .collect::<Vec<_>>();
        if let Some(last) = bins.last_mut() {
            last.range.end = hi.next_up();
        }

        // Bins are contiguous, so the first bin ending above `val` is the one containing it.
        let mut excluded = 0;
        for &val in &values {
            if !val.is_finite() || val < lo || val > hi {
                excluded += 1;
                continue;
            }
            let idx = bins
                .partition_point(|bin| bin.range.end <= val)
                .min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins, excluded }
    }

    /// Total number of values counted in the bins.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// The largest bin count, or 0 for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_len() {
        let values = [
            83.1, 91.4, 77.0, 102.3, 88.8, 69.5, 95.2, 85.0, 79.9, 90.1, 84.4, 99.9,
        ];
        let histogram = Histogram::new(values, Histogram::DEFAULT_NUM_BINS, None);
        assert_eq!(histogram.bins.len(), Histogram::DEFAULT_NUM_BINS);
        assert_eq!(histogram.total(), values.len() as u64);
        assert_eq!(histogram.excluded, 0);
    }

    #[test]
    fn test_min_and_max_land_in_outer_bins() {
        let histogram = Histogram::new([0.0, 4.0, 10.0], 5, None);
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[2].count, 1);
        assert_eq!(histogram.bins[4].count, 1);
        assert!(histogram.bins[4].range.contains(&10.0));
        assert_eq!(histogram.bins[0].range.start, 0.0);
    }

    #[test]
    fn test_constant_values_are_widened() {
        let histogram = Histogram::new([3.0, 3.0, 3.0], 2, None);
        assert_eq!(histogram.bins[0].range, 2.5..3.0);
        assert_eq!(histogram.bins[0].count, 0);
        assert_eq!(histogram.bins[1].count, 3);
    }

    #[test]
    fn test_explicit_range_excludes_outside_values() {
        let histogram = Histogram::new([-5.0, 0.0, 50.0, 100.0, 150.0], 4, Some((0.0, 100.0)));
        assert_eq!(histogram.excluded, 2);
        assert_eq!(histogram.total(), 3);
        assert_eq!(
            histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>(),
            vec![1, 0, 1, 1]
        );
        assert_eq!(histogram.max_count(), 1);
    }

    #[test]
    fn test_empty_input_or_zero_bins() {
        let histogram = Histogram::new(Vec::new(), 10, None);
        assert!(histogram.bins.is_empty());
        assert_eq!(histogram.max_count(), 0);

        let histogram = Histogram::new([1.0, 2.0], 0, None);
        assert!(histogram.bins.is_empty());
        assert_eq!(histogram.excluded, 2);
    }

    #[test]
    fn test_values_near_edges_land_in_containing_bin() {
        let range = (0.3, 7.9);
        let edges = Histogram::new([0.3], 7, Some(range))
            .bins
            .iter()
            .map(|bin| bin.range.start)
            .collect::<Vec<_>>();
        for edge in edges {
            for val in [edge.next_down(), edge, edge.next_up()] {
                let histogram = Histogram::new([val], 7, Some(range));
                if histogram.excluded == 1 {
                    assert!(val < range.0);
                    continue;
                }
                let bin = histogram.bins.iter().find(|bin| bin.count == 1).unwrap();
                assert!(bin.range.contains(&val), "{val} counted in {:?}", bin.range);
            }
        }
    }

    #[test]
    fn test_non_finite_values_are_excluded() {
        let histogram = Histogram::new([1.0, f64::NAN, 2.0, f64::INFINITY], 2, None);
        assert_eq!(histogram.total(), 2);
        assert_eq!(histogram.excluded, 2);
    }
}
