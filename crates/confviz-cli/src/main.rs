mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("{}", failure_message(&e));
        std::process::exit(1);
    }
}

fn failure_message(error: &CliError) -> String {
    format!("\n❌ Error: {}", error)
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 confviz v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Convert(args) => {
            info!("Dispatching to 'convert' command.");
            commands::convert::run(args)
        }
        Commands::Rank(args) => {
            info!("Dispatching to 'rank' command.");
            commands::rank::run(args)
        }
    };

    match &command_result {
        Ok(_) => {
            info!("✅ Command completed successfully.");
            if !cli.quiet {
                println!("✅ Command completed successfully.");
            }
        }
        Err(e) => debug!("Command failed: {:?}", e),
    }

    command_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn failure_message_names_the_failing_path() {
        let error = CliError::FileWriting {
            path: PathBuf::from("/nonexistent/dir/x.log"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound).into(),
        };

        let message = failure_message(&error);

        assert!(message.contains("❌ Error: Failed to write '/nonexistent/dir/x.log'"));
    }

    #[test]
    fn failure_message_is_a_single_report() {
        let message = failure_message(&CliError::Config("bad value".to_string()));
        assert_eq!(message.matches("bad value").count(), 1);
    }
}
