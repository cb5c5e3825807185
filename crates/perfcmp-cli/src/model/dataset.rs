use std::iter;

use anyhow::Context as _;
use chrono::{DateTime, Days, NaiveDate, Utc};
use perfcmp_synth::{
    config::GeneratorConfig,
    generator::{Generator, NamedSeries},
};

/// Generated series together with the calendar they cover.
///
/// Sample `i` of every series belongs to day `start_date + i`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub generated_at: DateTime<Utc>,
    /// Seed that reproduces the data with the same configuration.
    #[serde(default)]
    pub seed: Option<u64>,
    pub start_date: NaiveDate,
    pub series: Vec<NamedSeries>,
}

impl Dataset {
    /// Generates a dataset ending yesterday, so the last sample is the most recent full day.
    pub fn generate(config: &GeneratorConfig) -> anyhow::Result<Self> {
        let generated_at = Utc::now();
        let len = u64::try_from(config.len).context("series length does not fit in u64")?;
        let start_date = generated_at
            .date_naive()
            .checked_sub_days(Days::new(len))
            .context("series length reaches before the earliest supported date")?;
        Self::generate_from(config, generated_at, start_date)
    }

    pub fn generate_from(
        config: &GeneratorConfig,
        generated_at: DateTime<Utc>,
        start_date: NaiveDate,
    ) -> anyhow::Result<Self> {
        let mut generator =
            Generator::new(config).context("Invalid generator configuration")?;
        let series = generator.generate();
        tracing::info!(
            seed = generator.seed(),
            series = series.len(),
            len = config.len,
            %start_date,
            "generated dataset"
        );
        Ok(Self {
            generated_at,
            seed: Some(generator.seed()),
            start_date,
            series,
        })
    }

    /// Number of time steps, taken from the longest series.
    pub fn num_days(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).max().unwrap_or(0)
    }

    /// Calendar day of each time step.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        iter::successors(Some(self.start_date), NaiveDate::succ_opt).take(self.num_days())
    }
}
