// file: src/executor.rs
// version: 1.0.0
// guid: f967407e-0c81-4d1d-bad4-ba1d77b2cb25

//! Process execution for the initializer

use crate::error::ImportError;
use crate::Result;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// A single process launch: program, arguments, working directory, stdout sink
#[derive(Debug, Clone)]
pub struct ProcessSpec<'a> {
    pub program: &'a Path,
    pub args: &'a [String],
    pub work_dir: &'a Path,
    pub log_file: &'a Path,
}

/// Trait for running the initializer, so the invoker can be exercised without spawning
#[async_trait::async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the process to completion.
    ///
    /// Returns the exit code, or `None` when the process was terminated by a signal.
    async fn run(&self, spec: ProcessSpec<'_>) -> Result<Option<i32>>;
}

/// Runs processes on the local machine
#[derive(Debug, Default, Clone)]
pub struct LocalRunner;

impl LocalRunner {
    /// Create a new local runner
    pub fn new() -> Self {
        Self
    }

    /// Resolve `program` against PATH unless it already names a path
    pub fn resolve_program(program: &Path) -> Result<PathBuf> {
        if program.components().count() > 1 {
            return Ok(program.to_path_buf());
        }
        which::which(program).map_err(|e| ImportError::Spawn {
            program: program.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()),
        })
    }
}

#[async_trait::async_trait]
impl ProcessRunner for LocalRunner {
    async fn run(&self, spec: ProcessSpec<'_>) -> Result<Option<i32>> {
        let program = Self::resolve_program(spec.program)?;

        if !spec.work_dir.is_dir() {
            return Err(ImportError::MissingWorkDir(spec.work_dir.to_path_buf()));
        }

        if let Some(parent) = spec.log_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let log = File::create(spec.log_file)?;

        info!(
            "Running {} in {} (stdout -> {})",
            program.display(),
            spec.work_dir.display(),
            spec.log_file.display()
        );

        let status = Command::new(&program)
            .args(spec.args)
            .current_dir(spec.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::from(log))
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ImportError::Spawn {
                program: program.display().to_string(),
                source,
            })?;

        match status.code() {
            Some(code) => debug!("{} exited with code {}", program.display(), code),
            None => warn!("{} was terminated by a signal", program.display()),
        }

        Ok(status.code())
    }
}
