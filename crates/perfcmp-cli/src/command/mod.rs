use std::path::PathBuf;

use clap::{Parser, Subcommand};
use perfcmp_synth::config::GeneratorConfig;

use self::{generate::GenerateArg, report::ReportArg, summarize::SummarizeArg};
use crate::util;

mod generate;
mod report;
mod summarize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug details (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// What to do; defaults to `report`
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate data and print the comparison report
    Report(#[clap(flatten)] ReportArg),
    /// Generate data and write it as JSON
    Generate(#[clap(flatten)] GenerateArg),
    /// Summarize a JSON dataset written by `generate`
    Summarize(#[clap(flatten)] SummarizeArg),
}

/// Options shared by every command that generates data.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GeneratorArg {
    /// Generator configuration file (JSON); built-in defaults when absent
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed of the random number generator (overrides the configuration file)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of days per series (overrides the configuration file)
    #[arg(long)]
    days: Option<usize>,
}

impl GeneratorArg {
    /// Loads the configuration file, if any, and applies the command-line overrides.
    pub(crate) fn load_config(&self) -> anyhow::Result<GeneratorConfig> {
        let GeneratorArg { config, seed, days } = self;
        let mut config = match config {
            Some(path) => util::load_config(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(seed) = seed {
            config.seed = Some(*seed);
        }
        if let Some(days) = days {
            config.len = *days;
        }
        Ok(config)
    }
}

pub fn run(args: CommandArgs) -> anyhow::Result<()> {
    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Summarize(arg) => summarize::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_consistent() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_report() {
        let args = CommandArgs::try_parse_from(["perfcmp"]).unwrap();
        assert!(args.mode.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_report_arguments() {
        let args =
            CommandArgs::try_parse_from(["perfcmp", "report", "--seed", "5", "--days", "12", "-v"])
                .unwrap();
        assert!(args.verbose);
        let Some(Mode::Report(report)) = args.mode else {
            panic!("expected report mode");
        };
        let config = report.generator.load_config().unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.len, 12);
        assert_eq!(config.series, GeneratorConfig::default().series);
    }

    #[test]
    fn test_summarize_requires_input() {
        assert!(CommandArgs::try_parse_from(["perfcmp", "summarize"]).is_err());
        let args = CommandArgs::try_parse_from(["perfcmp", "summarize", "data.json"]).unwrap();
        assert!(matches!(args.mode, Some(Mode::Summarize(_))));
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let arg = GeneratorArg {
            config: Some(PathBuf::from("/nonexistent/perfcmp-config.json")),
            ..GeneratorArg::default()
        };
        let err = arg.load_config().unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Failed to open generator config file")
        );
    }
}
