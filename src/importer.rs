// file: src/importer.rs
// version: 1.0.0
// guid: 94e325d9-3ca2-4130-9e5b-328893436a77

//! Normatives import: stage, extract, run the initializer

use crate::archive;
use crate::config::{ImportPaths, ProvisioningConfig};
use crate::error::ImportError;
use crate::executor::{LocalRunner, ProcessRunner, ProcessSpec};
use crate::invocation::{InvocationCommand, Protocol};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

/// Outcome of a successful import run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub log_path: PathBuf,
    pub protocol: Protocol,
    pub port: u16,
    pub files_extracted: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Imports the normatives into the backend described by a [`ProvisioningConfig`]
pub struct ImportInvoker<R: ProcessRunner = LocalRunner> {
    config: ProvisioningConfig,
    paths: ImportPaths,
    source_archive: Option<PathBuf>,
    runner: R,
}

impl ImportInvoker<LocalRunner> {
    /// Create an invoker that runs the initializer locally
    pub fn new(config: ProvisioningConfig, paths: ImportPaths) -> Self {
        Self::with_runner(config, paths, LocalRunner::new())
    }
}

impl<R: ProcessRunner> ImportInvoker<R> {
    /// Create an invoker with a custom process runner
    pub fn with_runner(config: ProvisioningConfig, paths: ImportPaths, runner: R) -> Self {
        Self {
            config,
            paths,
            source_archive: None,
            runner,
        }
    }

    /// Copy this archive into the staged location before extracting
    pub fn with_source_archive(mut self, source: impl Into<PathBuf>) -> Self {
        self.source_archive = Some(source.into());
        self
    }

    pub fn paths(&self) -> &ImportPaths {
        &self.paths
    }

    /// Command the initializer would be run with
    pub fn command(&self) -> InvocationCommand {
        InvocationCommand::from_config(&self.config)
    }

    /// Stage and extract the archive on the blocking pool, keeping the runtime thread free
    async fn prepare_archive(&self) -> Result<u32> {
        let source = self.source_archive.clone();
        let staged = self.paths.archive.clone();
        let extract_dir = self.paths.extract_dir.clone();

        tokio::task::spawn_blocking(move || {
            if let Some(source) = source {
                archive::stage_archive(&source, &staged)?;
            }
            archive::extract_tar_gz(&staged, &extract_dir)
        })
        .await
        .map_err(|e| ImportError::archive(format!("Archive extraction task failed: {}", e)))?
    }

    /// Run the import once.
    ///
    /// Fails with [`ImportError::ProcessFailure`] when the initializer exits non-zero.
    pub async fn run(&self) -> Result<ExecutionResult> {
        let started_at = Utc::now();
        let command = self.command();
        info!(
            "Importing normatives into {}://{}:{}",
            command.protocol, command.address, command.port
        );

        let files_extracted = self.prepare_archive().await?;

        let args = command.args();
        info!(
            "Executing: {}",
            InvocationCommand::render(
                &self.paths.initializer.display().to_string(),
                &command.redacted_args()
            )
        );

        let exit_code = self
            .runner
            .run(ProcessSpec {
                program: &self.paths.initializer,
                args: &args,
                work_dir: &self.paths.work_dir,
                log_file: &self.paths.log_file,
            })
            .await?
            .unwrap_or(-1);

        if exit_code != 0 {
            error!(
                "Normatives import failed with exit code {}, see {}",
                exit_code,
                self.paths.log_file.display()
            );
            return Err(ImportError::ProcessFailure { exit_code });
        }

        info!("Normatives import completed successfully");
        Ok(ExecutionResult {
            exit_code,
            log_path: self.paths.log_file.clone(),
            protocol: command.protocol,
            port: command.port,
            files_extracted,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
