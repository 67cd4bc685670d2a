//! CRIVET CLI
//!
//! Evaluate drug/comorbidity alerts and inspect the loaded rule repository.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use crivet_alerts::{AlertService, AlertServiceConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// CRIVET: drug/comorbidity alerts for veterinary anaesthesia and critical care.
#[derive(Parser, Debug)]
#[command(name = "crivet", version, about)]
struct Cli {
    /// Path to the TOML configuration file. A missing file means defaults.
    #[arg(
        long,
        env = "CRIVET_CONFIG",
        default_value = "crivet.toml",
        global = true
    )]
    config: PathBuf,

    /// Output format. Overrides `[output] format` from the configuration.
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<crivet_alerts::OutputFormat> for OutputFormat {
    fn from(format: crivet_alerts::OutputFormat) -> Self {
        match format {
            crivet_alerts::OutputFormat::Text => Self::Text,
            crivet_alerts::OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate alerts for a drug and patient.
    Check(commands::check::CheckArgs),
    /// Evaluate alerts and show what happened to every rule.
    Explain(commands::check::CheckArgs),
    /// Evaluate a request in the legacy calling convention.
    Legacy(commands::legacy::LegacyArgs),
    /// Inspect the rule repository.
    Rules(commands::rules::RulesArgs),
}

impl Command {
    /// `rules validate` reports every duplicate itself instead of failing
    /// on the first one while the service is built.
    fn reports_validation(&self) -> bool {
        matches!(
            self,
            Self::Rules(commands::rules::RulesArgs {
                command: commands::rules::RulesCommand::Validate
            })
        )
    }
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AlertServiceConfig::load(&cli.config)?;
    if cli.command.reports_validation() {
        config.rules.validate_on_load = false;
    }
    let format = cli.format.unwrap_or_else(|| config.output.format.into());

    let service = AlertService::from_config(&config)?;
    info!(
        config = %cli.config.display(),
        rules = service.repository().len(),
        "alert service ready"
    );

    match &cli.command {
        Command::Check(args) => commands::check::run(&service, args, format),
        Command::Explain(args) => commands::explain::run(&service, args, format),
        Command::Legacy(args) => commands::legacy::run(&service, args, format),
        Command::Rules(args) => commands::rules::run(&service, args, format),
    }
}
