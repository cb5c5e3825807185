use std::path::PathBuf;

use crate::{model::summary_report::SummaryReport, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SummarizeArg {
    /// Path to the dataset file (JSON format)
    input: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let SummarizeArg { input, output } = arg;

    let dataset = util::load_dataset(input)?;
    tracing::info!(series = dataset.series.len(), path = %input.display(), "loaded dataset");
    let report = SummaryReport::from_dataset(&dataset)?;
    util::save_json(&report, output.as_deref())?;
    Ok(())
}
