//! Summary of a single sample series.
//!
//! [`SeriesSummary`] condenses an ordered series of samples (one metric over
//! successive time steps) into its descriptive statistics and its least-squares
//! trend against the sample index. It is the record the report and the charts
//! are built from.
//!
//! # Examples
//!
//! ```
//! use perfcmp_stats::summary::summarize;
//!
//! let summary = summarize(&[70.0, 75.0, 80.0, 85.0, 90.0]).unwrap();
//! assert_eq!(summary.mean, 80.0);
//! assert_eq!(summary.delta, 20.0);
//! assert_eq!(summary.trend_slope, 5.0);
//! assert_eq!(summary.trend_intercept, 70.0);
//! assert!((summary.std_dev - 7.0711).abs() < 1e-4);
//! ```

use crate::trend::LinearTrend;

/// Reason a series was rejected before any statistic was computed.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidInput {
    #[display("series must contain at least 2 samples, got {len}")]
    TooShort { len: usize },
    #[display("sample {index} is not finite ({value})")]
    NonFinite { index: usize, value: f64 },
}

/// Error returned when a series cannot be summarized.
#[derive(
    Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SummaryError {
    #[display("invalid input: {_0}")]
    InvalidInput(#[error(not(source))] InvalidInput),
    #[display("degenerate input: no finite trend or spread for {len} samples")]
    DegenerateInput { len: usize },
}

impl From<InvalidInput> for SummaryError {
    fn from(value: InvalidInput) -> Self {
        Self::InvalidInput(value)
    }
}

/// Descriptive statistics and linear trend of an ordered series.
///
/// Invariants:
///
/// - `delta == last - first`
/// - `std_dev >= 0`
/// - `trend_slope` and `trend_intercept` are the least-squares fit of the
///   values against their index `0..len`
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SeriesSummary {
    /// Number of samples.
    pub len: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (divides by `len`).
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Sample at index 0.
    pub first: f64,
    /// Sample at index `len - 1`.
    pub last: f64,
    /// `last - first`.
    pub delta: f64,
    /// Slope of the least-squares trend, per time step.
    pub trend_slope: f64,
    /// Intercept of the least-squares trend at index 0.
    pub trend_intercept: f64,
}

impl SeriesSummary {
    /// Minimum number of samples a series must contain.
    pub const MIN_LEN: usize = 2;

    /// Summarizes `values`, taken in order.
    ///
    /// All sums are accumulated left to right in sample order over the offsets
    /// from the first sample, so identical input always yields bit-identical
    /// output and a constant series `c` summarizes to exactly `mean == c`,
    /// `std_dev == 0`, `trend_slope == 0` and `trend_intercept == c`.
    ///
    /// # Errors
    ///
    /// * [`SummaryError::InvalidInput`] if `values` has fewer than
    ///   [`Self::MIN_LEN`] samples or contains a NaN or infinity.
    /// * [`SummaryError::DegenerateInput`] if the trend cannot be fitted or the
    ///   statistics overflow `f64`.
    #[expect(clippy::cast_precision_loss)]
    pub fn new(values: &[f64]) -> Result<Self, SummaryError> {
        validate_series(values)?;
        let trend = LinearTrend::fit_validated(values)?;

        let len = values.len();
        let n = len as f64;
        let first = values[0];
        let mean = first + values.iter().map(|v| v - first).sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        if !mean.is_finite() || !variance.is_finite() {
            return Err(SummaryError::DegenerateInput { len });
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let last = values[len - 1];

        Ok(Self {
            len,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            first,
            last,
            delta: last - first,
            trend_slope: trend.slope,
            trend_intercept: trend.intercept,
        })
    }

    /// Returns the fitted trend as a line that can be evaluated.
    #[must_use]
    pub fn trend(&self) -> LinearTrend {
        LinearTrend {
            slope: self.trend_slope,
            intercept: self.trend_intercept,
        }
    }
}

/// Summarizes an ordered series. See [`SeriesSummary::new`].
pub fn summarize(values: &[f64]) -> Result<SeriesSummary, SummaryError> {
    SeriesSummary::new(values)
}

/// Checks the length and finiteness preconditions shared by the summary and the trend fit.
pub(crate) fn validate_series(values: &[f64]) -> Result<(), InvalidInput> {
    if values.len() < SeriesSummary::MIN_LEN {
        return Err(InvalidInput::TooShort { len: values.len() });
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(InvalidInput::NonFinite { index, value });
    }
    Ok(())
}
