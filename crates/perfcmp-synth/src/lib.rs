//! Synthetic performance data.
//!
//! A [`generator::Generator`] turns an explicit [`config::GeneratorConfig`] into one
//! series per configured system: normally distributed samples, clipped to a range,
//! plus a linear drift. The same seed always produces the same data.
//!
//! ```
//! use perfcmp_synth::{config::GeneratorConfig, generator::Generator};
//!
//! let config = GeneratorConfig {
//!     seed: Some(2024),
//!     ..GeneratorConfig::default()
//! };
//! let series = Generator::new(&config).unwrap().generate();
//! assert_eq!(series.len(), 2);
//! assert_eq!(series[0].values.len(), 30);
//! ```

pub mod config;
pub mod generator;
