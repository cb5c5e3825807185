use std::collections::HashSet;

/// Parameters of one synthetic series.
///
/// Samples are drawn from `Normal(mean, std_dev)`, clipped to the generator's clip
/// range, and then shifted by a drift that grows linearly from `drift_start` at the
/// first sample to `drift_end` at the last.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesConfig {
    pub name: String,
    pub mean: f64,
    pub std_dev: f64,
    #[serde(default)]
    pub drift_start: f64,
    #[serde(default)]
    pub drift_end: f64,
}

impl SeriesConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, mean: f64, std_dev: f64) -> Self {
        Self {
            name: name.into(),
            mean,
            std_dev,
            drift_start: 0.0,
            drift_end: 0.0,
        }
    }

    #[must_use]
    pub fn with_drift(mut self, start: f64, end: f64) -> Self {
        self.drift_start = start;
        self.drift_end = end;
        self
    }
}

/// Configuration of a [`crate::generator::Generator`].
///
/// Missing fields in a JSON configuration fall back to [`GeneratorConfig::default`],
/// which reproduces the 30-day GROK vs Gemini comparison.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed of the random number generator. A random seed is drawn when absent.
    pub seed: Option<u64>,
    /// Number of samples (days) per series.
    pub len: usize,
    /// Lower bound applied to raw samples before drift is added.
    pub clip_min: f64,
    /// Upper bound applied to raw samples before drift is added.
    pub clip_max: f64,
    pub series: Vec<SeriesConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            len: 30,
            clip_min: 0.0,
            clip_max: 100.0,
            series: vec![
                SeriesConfig::new("GROK", 85.0, 10.0).with_drift(0.0, 10.0),
                SeriesConfig::new("Gemini", 78.0, 12.0).with_drift(0.0, 5.0),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    #[display("series length must be at least 2, got {len}")]
    TooShort { len: usize },
    #[display("no series configured")]
    NoSeries,
    #[display("clip range is empty: min {min} > max {max}")]
    InvalidClipRange { min: f64, max: f64 },
    #[display("series '{name}': mean must be finite, got {mean}")]
    InvalidMean { name: String, mean: f64 },
    #[display("series '{name}': standard deviation must be finite and non-negative, got {std_dev}")]
    InvalidStdDev { name: String, std_dev: f64 },
    #[display("series '{name}': drift must be finite, got {start}..{end}")]
    InvalidDrift { name: String, start: f64, end: f64 },
    #[display("series name '{name}' is used more than once")]
    DuplicateName { name: String },
}

impl GeneratorConfig {
    /// Minimum number of samples per series; a trend needs two points.
    pub const MIN_LEN: usize = 2;

    /// Checks that every series can be generated and summarized.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.len < Self::MIN_LEN {
            return Err(GeneratorError::TooShort { len: self.len });
        }
        if self.series.is_empty() {
            return Err(GeneratorError::NoSeries);
        }
        let clip_ok = self.clip_min.is_finite() && self.clip_max.is_finite();
        if !clip_ok || self.clip_min > self.clip_max {
            return Err(GeneratorError::InvalidClipRange {
                min: self.clip_min,
                max: self.clip_max,
            });
        }

        let mut names = HashSet::new();
        for series in &self.series {
            if !series.mean.is_finite() {
                return Err(GeneratorError::InvalidMean {
                    name: series.name.clone(),
                    mean: series.mean,
                });
            }
            if !series.std_dev.is_finite() || series.std_dev < 0.0 {
                return Err(GeneratorError::InvalidStdDev {
                    name: series.name.clone(),
                    std_dev: series.std_dev,
                });
            }
            if !series.drift_start.is_finite() || !series.drift_end.is_finite() {
                return Err(GeneratorError::InvalidDrift {
                    name: series.name.clone(),
                    start: series.drift_start,
                    end: series.drift_end,
                });
            }
            if !names.insert(series.name.as_str()) {
                return Err(GeneratorError::DuplicateName {
                    name: series.name.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GeneratorConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.len, 30);
        assert_eq!(config.series.len(), 2);
        assert_eq!(config.series[0].name, "GROK");
        assert_eq!(config.series[1].drift_end, 5.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{ "seed": 7, "len": 10 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.len, 10);
        assert_eq!(config.clip_max, 100.0);
        assert_eq!(config.series, GeneratorConfig::default().series);
    }

    #[test]
    fn test_series_drift_defaults_to_zero() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{ "series": [{ "name": "a", "mean": 50.0, "std_dev": 5.0 }] }"#,
        )
        .unwrap();
        assert_eq!(config.series, vec![SeriesConfig::new("a", 50.0, 5.0)]);
    }

    #[test]
    fn test_rejects_invalid_configs() {
        let base = GeneratorConfig::default();

        let config = GeneratorConfig {
            len: 1,
            ..base.clone()
        };
        assert_eq!(config.validate(), Err(GeneratorError::TooShort { len: 1 }));

        let config = GeneratorConfig {
            series: vec![],
            ..base.clone()
        };
        assert_eq!(config.validate(), Err(GeneratorError::NoSeries));

        let config = GeneratorConfig {
            clip_min: 10.0,
            clip_max: 0.0,
            ..base.clone()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::InvalidClipRange { .. })
        ));

        let config = GeneratorConfig {
            series: vec![SeriesConfig::new("a", 1.0, -1.0)],
            ..base.clone()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::InvalidStdDev { .. })
        ));

        let config = GeneratorConfig {
            series: vec![SeriesConfig::new("a", f64::NAN, 1.0)],
            ..base.clone()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::InvalidMean { .. })
        ));

        let config = GeneratorConfig {
            series: vec![SeriesConfig::new("a", 1.0, 1.0).with_drift(0.0, f64::INFINITY)],
            ..base.clone()
        };
        assert!(matches!(
            config.validate(),
            Err(GeneratorError::InvalidDrift { .. })
        ));

        let config = GeneratorConfig {
            series: vec![
                SeriesConfig::new("a", 1.0, 1.0),
                SeriesConfig::new("a", 2.0, 1.0),
            ],
            ..base
        };
        assert_eq!(
            config.validate(),
            Err(GeneratorError::DuplicateName {
                name: "a".to_owned()
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = GeneratorError::InvalidStdDev {
            name: "GROK".to_owned(),
            std_dev: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "series 'GROK': standard deviation must be finite and non-negative, got -2"
        );
    }
}
