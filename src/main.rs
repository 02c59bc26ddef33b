use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use estimates::commands::base_commands::{CliArgs, Commands};
use estimates::commands::convert_rate_cmd::convert_rate_command;
use estimates::commands::estimate_cmd::estimate_command;
use estimates::commands::init_cmd::init_command;

/// Logs go to stderr so reports on stdout can be piped.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("estimates=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();
    let result = match args.command {
        cmd @ Commands::Estimate { .. } => estimate_command(cmd),
        cmd @ Commands::Init { .. } => init_command(cmd),
        cmd @ Commands::ConvertRate { .. } => convert_rate_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
