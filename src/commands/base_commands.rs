use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::scenario::Scenario;
use crate::domain::team_member::CompensationType;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate cost, capacity and risk of a project YAML file
    Estimate {
        /// Project YAML file
        #[arg(short, long)]
        input: String,
        /// Optional output file for the full report
        #[arg(short, long)]
        output: Option<String>,
        /// Scenario to highlight and check the budget against
        #[arg(short, long, value_enum, default_value_t = ScenarioArg::Realistic)]
        scenario: ScenarioArg,
        /// Optional employee directory YAML used to resolve team members
        #[arg(short, long)]
        employees: Option<String>,
        /// Format of the output file
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Write a starter project YAML file
    Init {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Project start date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
    },
    /// Convert a compensation rate between hourly and monthly
    ConvertRate {
        /// Rate to convert
        #[arg(short, long)]
        value: f64,
        /// Unit of the given rate
        #[arg(long, value_enum)]
        from: CompensationArg,
        /// Unit to convert to
        #[arg(long, value_enum)]
        to: CompensationArg,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    Optimistic,
    Realistic,
    Pessimistic,
}

impl From<ScenarioArg> for Scenario {
    fn from(value: ScenarioArg) -> Self {
        match value {
            ScenarioArg::Optimistic => Scenario::Optimistic,
            ScenarioArg::Realistic => Scenario::Realistic,
            ScenarioArg::Pessimistic => Scenario::Pessimistic,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CompensationArg {
    Hourly,
    Monthly,
}

impl From<CompensationArg> for CompensationType {
    fn from(value: CompensationArg) -> Self {
        match value {
            CompensationArg::Hourly => CompensationType::Hourly,
            CompensationArg::Monthly => CompensationType::Monthly,
        }
    }
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
