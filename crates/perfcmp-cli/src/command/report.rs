use std::path::PathBuf;

use perfcmp_stats::histogram::Histogram;

use super::GeneratorArg;
use crate::{
    model::{dataset::Dataset, summary_report::SummaryReport},
    util::Output,
    view::{chart_text, summary_text},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub(crate) generator: GeneratorArg,
    /// Number of histogram bins in the chart data
    #[arg(long, default_value_t = Histogram::DEFAULT_NUM_BINS)]
    bins: usize,
    /// Also print the data behind the comparison charts
    #[arg(long)]
    charts: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            generator: GeneratorArg::default(),
            bins: Histogram::DEFAULT_NUM_BINS,
            charts: false,
            output: None,
        }
    }
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg {
        generator,
        bins,
        charts,
        output,
    } = arg;

    let config = generator.load_config()?;
    let dataset = Dataset::generate(&config)?;
    let report = SummaryReport::from_dataset(&dataset)?;

    let mut output = Output::create(output.as_deref())?;
    output.render("report", |w| summary_text::write_summary(w, &report))?;
    if *charts {
        output.render("charts", |w| {
            chart_text::write_charts(w, &dataset, &report, *bins)
        })?;
    }
    tracing::debug!(seed = ?dataset.seed, output = output.label(), "report rendered");
    output.finish()?;
    Ok(())
}
