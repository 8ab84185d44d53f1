// file: src/cli/args.rs
// version: 1.0.0
// guid: 5232fdc9-e5a5-4aa5-b8f9-3b179bbebb37

//! Command line argument definitions

use crate::config::paths::{
    DEFAULT_ARCHIVE_PATH, DEFAULT_EXTRACT_DIR, DEFAULT_INITIALIZER, DEFAULT_LOG_FILE,
    DEFAULT_WORK_DIR,
};
use crate::config::ImportPaths;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "normatives-import-agent")]
#[command(about = "Deploy the normatives archive and import it into the catalog backend")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, help = "Emit logs as JSON (filter from RUST_LOG)")]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the normatives archive and run the initializer
    Import {
        #[arg(short, long, env = "NORMATIVES_CONFIG", help = "Provisioning config (YAML, JSON or TOML)")]
        config: String,

        #[arg(short, long, help = "Archive to copy into the staged location first")]
        source: Option<String>,

        #[command(flatten)]
        paths: PathArgs,

        #[arg(long, help = "Show what would be done without actually doing it")]
        dry_run: bool,

        #[arg(long, help = "Print the execution result as JSON")]
        json: bool,
    },

    /// Print the initializer command line derived from the configuration
    ShowCommand {
        #[arg(short, long, env = "NORMATIVES_CONFIG")]
        config: String,

        #[arg(long, default_value = DEFAULT_INITIALIZER)]
        initializer: String,

        #[arg(long, help = "Print the basic auth header instead of masking it")]
        show_secrets: bool,
    },

    /// Load the configuration and report the selected endpoint
    ValidateConfig {
        #[arg(short, long, env = "NORMATIVES_CONFIG")]
        config: String,
    },
}

/// Overrides for the well-known import locations
#[derive(Args, Clone, Debug)]
pub struct PathArgs {
    #[arg(long, default_value = DEFAULT_ARCHIVE_PATH)]
    pub archive: String,

    #[arg(long, default_value = DEFAULT_EXTRACT_DIR)]
    pub extract_dir: String,

    #[arg(long, default_value = DEFAULT_WORK_DIR, help = "Directory the initializer runs in")]
    pub work_dir: String,

    #[arg(long, default_value = DEFAULT_LOG_FILE, help = "File receiving the initializer's stdout")]
    pub log_file: String,

    #[arg(long, default_value = DEFAULT_INITIALIZER)]
    pub initializer: String,
}

impl PathArgs {
    /// Build import paths, expanding `~` and environment references
    pub fn to_import_paths(&self) -> crate::Result<ImportPaths> {
        Ok(ImportPaths {
            archive: ImportPaths::expand(&self.archive)?,
            extract_dir: ImportPaths::expand(&self.extract_dir)?,
            work_dir: ImportPaths::expand(&self.work_dir)?,
            log_file: ImportPaths::expand(&self.log_file)?,
            initializer: ImportPaths::expand(&self.initializer)?,
        })
    }
}
