use anyhow::Context as _;
use perfcmp_stats::{
    comparison::Verdict,
    summary::{self, SeriesSummary},
};

use crate::model::dataset::Dataset;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SeriesReport {
    pub name: String,
    pub summary: SeriesSummary,
}

/// Summaries of every series in a dataset plus the verdict by mean.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SummaryReport {
    pub series: Vec<SeriesReport>,
    pub verdict: Option<Verdict>,
}

impl SummaryReport {
    pub fn from_dataset(dataset: &Dataset) -> anyhow::Result<Self> {
        let series = dataset
            .series
            .iter()
            .map(|series| {
                let summary = summary::summarize(&series.values)
                    .with_context(|| format!("Failed to summarize series '{}'", series.name))?;
                tracing::debug!(name = %series.name, ?summary, "summarized series");
                Ok(SeriesReport {
                    name: series.name.clone(),
                    summary,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let verdict = Verdict::by_mean(series.iter().map(|s| (s.name.as_str(), &s.summary)));
        Ok(Self { series, verdict })
    }
}
