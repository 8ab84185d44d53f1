// file: src/cli/commands.rs
// version: 1.0.0
// guid: 553db75d-3337-4135-87f0-71e72f43b753

//! Command implementations for the CLI

use crate::{
    cli::args::PathArgs,
    config::{loader::ConfigLoader, ImportPaths, ProvisioningConfig},
    importer::ImportInvoker,
    invocation::InvocationCommand,
    logging::with_operation_span,
    Result,
};
use std::path::Path;
use tracing::info;

fn load_config(config_path: &str) -> Result<ProvisioningConfig> {
    let loader = ConfigLoader::new();
    loader.load_provisioning_config(ImportPaths::expand(config_path)?)
}

/// Extract the normatives and run the initializer
pub async fn import_command(
    config_path: &str,
    source: Option<String>,
    paths: &PathArgs,
    dry_run: bool,
    json_output: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let paths = paths.to_import_paths()?;

    let mut invoker = ImportInvoker::new(config, paths);
    if let Some(source) = source {
        invoker = invoker.with_source_archive(ImportPaths::expand(&source)?);
    }

    if dry_run {
        let paths = invoker.paths();
        info!(
            "DRY RUN: Would extract {} into {}",
            paths.archive.display(),
            paths.extract_dir.display()
        );
        info!(
            "DRY RUN: Would run in {}: {} > {}",
            paths.work_dir.display(),
            InvocationCommand::render(
                &paths.initializer.display().to_string(),
                &invoker.command().redacted_args()
            ),
            paths.log_file.display()
        );
        return Ok(());
    }

    let result = with_operation_span("import_normatives", || invoker.run()).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "Normatives imported via {} on port {} ({} files, log: {})",
            result.protocol,
            result.port,
            result.files_extracted,
            result.log_path.display()
        );
    }

    Ok(())
}

/// Print the derived initializer command line
pub async fn show_command_command(
    config_path: &str,
    initializer: &str,
    show_secrets: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let command = InvocationCommand::from_config(&config);
    let args = if show_secrets {
        command.args()
    } else {
        command.redacted_args()
    };

    println!("{}", InvocationCommand::render(initializer, &args));
    Ok(())
}

/// Load the configuration and report the endpoint it selects
pub async fn validate_config_command(config_path: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let command = InvocationCommand::from_config(&config);

    println!(
        "Configuration {} is valid",
        Path::new(config_path).display()
    );
    println!("  endpoint:   {}://{}:{}", command.protocol, command.address, command.port);
    println!(
        "  basic auth: {}",
        if command.auth_header.is_some() { "enabled" } else { "disabled" }
    );
    println!("  debug:      {}", command.debug);
    Ok(())
}
