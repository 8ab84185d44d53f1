// file: src/main.rs
// version: 1.0.0
// guid: 3c0b7f52-6a1e-4d8f-9b27-0e5d41c9a8f3

//! Normatives Import Agent - Main entry point

use clap::Parser;
use normatives_import_agent::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    logging::logger,
};
use tokio::signal;
use tracing::{error, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let logging = if cli.json_logs {
        logger::init_json_logger()
    } else {
        logger::init_logger(cli.verbose, cli.quiet)
    };
    if let Err(e) = logging {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let command_future = async move {
        match cli.command {
            Commands::Import {
                config,
                source,
                paths,
                dry_run,
                json,
            } => import_command(&config, source, &paths, dry_run, json).await,
            Commands::ShowCommand {
                config,
                initializer,
                show_secrets,
            } => show_command_command(&config, &initializer, show_secrets).await,
            Commands::ValidateConfig { config } => validate_config_command(&config).await,
        }
    };

    tokio::select! {
        result = command_future => {
            if let Err(e) = result {
                error!("{}", e);
                std::process::exit(e.exit_code());
            }
        }
        _ = signal::ctrl_c() => {
            warn!("Interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
