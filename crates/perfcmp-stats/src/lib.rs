//! Statistics for comparing performance series.
//!
//! This crate provides:
//!
//! - **Series summaries**: mean, population standard deviation, extremes, first/last
//!   values and a least-squares trend for one ordered series
//! - **Linear trends**: closed-form least-squares fit against the sample index
//! - **Descriptive statistics**: mean, median, variance, standard deviation of a dataset
//! - **Percentiles**: linearly interpolated percentile values
//! - **Histograms**: equal-width frequency distributions
//! - **Box plots**: quartiles, Tukey whiskers and outliers
//! - **Comparison**: picking the series with the highest mean, with explicit ties
//!
//! # Modules
//!
//! - [`summary`]: [`summary::SeriesSummary`] and [`summary::summarize`]
//! - [`trend`]: [`trend::LinearTrend`]
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation and storage
//! - [`histogram`]: Histogram construction for distribution charts
//! - [`boxplot`]: Box-plot statistics for range comparison charts
//! - [`comparison`]: [`comparison::Verdict`] by mean
//!
//! All functions are pure and synchronous.
//!
//! # Examples
//!
//! ```
//! use perfcmp_stats::{comparison::Verdict, summary::summarize};
//!
//! let grok = summarize(&[70.0, 75.0, 80.0, 85.0, 90.0]).unwrap();
//! let gemini = summarize(&[72.0, 74.0, 76.0, 78.0, 80.0]).unwrap();
//!
//! assert_eq!(grok.trend_slope, 5.0);
//! assert_eq!(gemini.trend_slope, 2.0);
//! assert_eq!(
//!     Verdict::by_mean([("GROK", &grok), ("Gemini", &gemini)]),
//!     Some(Verdict::Winner("GROK".to_owned())),
//! );
//! ```

pub mod boxplot;
pub mod comparison;
pub mod descriptive;
pub mod histogram;
pub mod percentiles;
pub mod summary;
pub mod trend;
