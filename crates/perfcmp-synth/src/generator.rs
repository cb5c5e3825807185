use rand::{Rng as _, SeedableRng as _};
use rand_distr::Normal;
use rand_pcg::Pcg32;

use crate::config::{GeneratorConfig, GeneratorError};

/// One generated series, in time order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
struct SeriesSampler {
    name: String,
    normal: Normal<f64>,
    drift: Vec<f64>,
}

/// Generates synthetic performance series from a [`GeneratorConfig`].
///
/// All randomness comes from a PCG generator seeded from the configuration (or from the
/// OS when no seed is configured). [`Generator::seed`] reports the seed in use so that
/// a run can be reproduced.
#[derive(Debug, Clone)]
pub struct Generator {
    rng: Pcg32,
    seed: u64,
    clip_min: f64,
    clip_max: f64,
    len: usize,
    samplers: Vec<SeriesSampler>,
}

impl Generator {
    /// Creates a generator after validating `config`.
    pub fn new(config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let samplers = config
            .series
            .iter()
            .map(|series| {
                let normal = Normal::new(series.mean, series.std_dev).map_err(|_| {
                    GeneratorError::InvalidStdDev {
                        name: series.name.clone(),
                        std_dev: series.std_dev,
                    }
                })?;
                Ok(SeriesSampler {
                    name: series.name.clone(),
                    normal,
                    drift: linspace(series.drift_start, series.drift_end, config.len),
                })
            })
            .collect::<Result<Vec<_>, GeneratorError>>()?;

        tracing::debug!(seed, len = config.len, series = samplers.len(), "generator ready");
        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            clip_min: config.clip_min,
            clip_max: config.clip_max,
            len: config.len,
            samplers,
        })
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one series per configured entry, in configuration order.
    ///
    /// Each raw sample is clipped to `[clip_min, clip_max]` and the linear drift is
    /// added afterwards, so drifted values may leave the clip range.
    pub fn generate(&mut self) -> Vec<NamedSeries> {
        let Self {
            rng,
            clip_min,
            clip_max,
            len,
            samplers,
            ..
        } = self;

        let mut generated = Vec::with_capacity(samplers.len());
        for sampler in samplers.iter() {
            let values = sampler
                .drift
                .iter()
                .map(|drift| {
                    let raw: f64 = rng.sample(sampler.normal);
                    raw.clamp(*clip_min, *clip_max) + drift
                })
                .collect::<Vec<_>>();
            tracing::debug!(name = %sampler.name, len = *len, "generated series");
            generated.push(NamedSeries {
                name: sampler.name.clone(),
                values,
            });
        }
        generated
    }
}

/// Returns `len` evenly spaced values from `start` to `end`, both inclusive.
///
/// # Examples
///
/// ```
/// # use perfcmp_synth::generator::linspace;
/// assert_eq!(linspace(0.0, 10.0, 5), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
/// assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn linspace(start: f64, end: f64, len: usize) -> Vec<f64> {
    match len {
        0 => vec![],
        1 => vec![start],
        _ => {
            let last = len - 1;
            (0..len)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        start + (end - start) * (i as f64) / (last as f64)
                    }
                })
                .collect()
        }
    }
}
