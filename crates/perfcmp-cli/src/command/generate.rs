use std::path::PathBuf;

use super::GeneratorArg;
use crate::{model::dataset::Dataset, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    #[clap(flatten)]
    pub(crate) generator: GeneratorArg,
    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg { generator, output } = arg;

    let config = generator.load_config()?;
    let dataset = Dataset::generate(&config)?;
    util::save_json(&dataset, output.as_deref())?;
    Ok(())
}
