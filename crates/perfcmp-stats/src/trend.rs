use crate::summary::{self, SummaryError};

/// A least-squares straight line fitted against the sample index.
///
/// The line minimizes `Σ (values[i] - (slope * i + intercept))²` over
/// `i in 0..values.len()`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct LinearTrend {
    /// Change in value per time step.
    pub slope: f64,
    /// Fitted value at index 0.
    pub intercept: f64,
}

impl LinearTrend {
    /// Fits a linear trend to `values` using the closed-form normal equations.
    ///
    /// ```text
    /// slope     = (N·Σ(i·v) − Σi·Σv) / (N·Σ(i²) − (Σi)²)
    /// intercept = (Σv − slope·Σi) / N
    /// ```
    ///
    /// Sums run left to right over the offsets from the first value, so the
    /// same input always yields bit-identical coefficients and a constant
    /// series fits exactly (slope 0, intercept equal to the constant).
    ///
    /// # Errors
    ///
    /// * [`SummaryError::InvalidInput`] if there are fewer than two values or
    ///   any value is not finite.
    /// * [`SummaryError::DegenerateInput`] if the denominator is zero or the
    ///   coefficients overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// # use perfcmp_stats::trend::LinearTrend;
    /// let trend = LinearTrend::fit(&[70.0, 75.0, 80.0, 85.0, 90.0]).unwrap();
    /// assert_eq!(trend.slope, 5.0);
    /// assert_eq!(trend.intercept, 70.0);
    /// ```
    pub fn fit(values: &[f64]) -> Result<Self, SummaryError> {
        summary::validate_series(values)?;
        Self::fit_validated(values)
    }

    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn fit_validated(values: &[f64]) -> Result<Self, SummaryError> {
        let len = values.len();
        let Some(&origin) = values.first() else {
            return Err(SummaryError::DegenerateInput { len });
        };
        let n = len as f64;
        let mut sum_x = 0.0;
        let mut sum_d = 0.0;
        let mut sum_xd = 0.0;
        let mut sum_xx = 0.0;
        for (i, &v) in values.iter().enumerate() {
            let x = i as f64;
            let d = v - origin;
            sum_x += x;
            sum_d += d;
            sum_xd += x * d;
            sum_xx += x * x;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            return Err(SummaryError::DegenerateInput { len });
        }
        let slope = (n * sum_xd - sum_x * sum_d) / denominator;
        let intercept = origin + (sum_d - slope * sum_x) / n;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(SummaryError::DegenerateInput { len });
        }
        Ok(Self { slope, intercept })
    }

    /// Returns the fitted value at index `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Returns the fitted values at indices `0..len`.
    ///
    /// These are the points of the trend line drawn over a scatter plot.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn points(&self, len: usize) -> Vec<f64> {
        (0..len).map(|i| self.predict(i as f64)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::InvalidInput;

    #[test]
    fn test_recovers_exact_line() {
        let values = (0_i32..10).map(|i| 2.0 * f64::from(i) + 5.0).collect::<Vec<_>>();
        let trend = LinearTrend::fit(&values).unwrap();
        assert!((trend.slope - 2.0).abs() < 1e-9);
        assert!((trend.intercept - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_points_define_the_line() {
        let trend = LinearTrend::fit(&[3.0, 1.0]).unwrap();
        assert_eq!(trend.slope, -2.0);
        assert_eq!(trend.intercept, 3.0);
    }

    #[test]
    fn test_residuals_are_orthogonal_to_index() {
        // Normal equations: Σr = 0 and Σ(i·r) = 0 at the optimum.
        let values = [1.0, 4.0, 2.0, 8.0, 5.0, 7.0];
        let trend = LinearTrend::fit(&values).unwrap();
        let residuals = values
            .iter()
            .zip(trend.points(values.len()))
            .map(|(v, p)| v - p)
            .collect::<Vec<_>>();
        let sum = residuals.iter().sum::<f64>();
        let weighted = residuals
            .iter()
            .zip(0_i32..)
            .map(|(r, i)| r * f64::from(i))
            .sum::<f64>();
        assert!(sum.abs() < 1e-9);
        assert!(weighted.abs() < 1e-9);
    }

    #[test]
    fn test_points_follow_predict() {
        let trend = LinearTrend {
            slope: 0.5,
            intercept: 1.0,
        };
        assert_eq!(trend.points(4), vec![1.0, 1.5, 2.0, 2.5]);
        assert_eq!(trend.predict(10.0), 6.0);
        assert!(trend.points(0).is_empty());
    }

    #[test]
    fn test_rejects_short_series() {
        assert_eq!(
            LinearTrend::fit(&[1.0]),
            Err(SummaryError::InvalidInput(InvalidInput::TooShort { len: 1 }))
        );
    }

    #[test]
    fn test_constant_fits_flat_line() {
        for c in [0.1, 85.3, 1e-3, -7.7] {
            let trend = LinearTrend::fit(&[c; 30]).unwrap();
            assert_eq!(trend.slope, 0.0);
            assert_eq!(trend.intercept, c);
        }
    }

    #[test]
    fn test_overflowing_fit_is_degenerate() {
        assert_eq!(
            LinearTrend::fit(&[f64::MAX, -f64::MAX, f64::MAX]),
            Err(SummaryError::DegenerateInput { len: 3 })
        );
    }

    #[test]
    fn test_denominator_guard() {
        assert_eq!(
            LinearTrend::fit_validated(&[1.0]),
            Err(SummaryError::DegenerateInput { len: 1 })
        );
        assert_eq!(
            LinearTrend::fit_validated(&[]),
            Err(SummaryError::DegenerateInput { len: 0 })
        );
    }
}
