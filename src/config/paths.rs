// file: src/config/paths.rs
// version: 1.0.0
// guid: 90816b7b-367f-4924-a861-487fa24f6876

//! Well-known filesystem locations used by the import

use std::path::{Path, PathBuf};

/// Where the normatives archive is staged on the target host
pub const DEFAULT_ARCHIVE_PATH: &str = "/var/tmp/normatives.tar.gz";
/// Directory the archive is extracted into
pub const DEFAULT_EXTRACT_DIR: &str = "/var/tmp";
/// Directory the initializer runs in (inside the extracted tree)
pub const DEFAULT_WORK_DIR: &str = "/var/tmp/normatives/import/tosca";
/// Initializer stdout destination
pub const DEFAULT_LOG_FILE: &str = "/var/lib/jetty/logs/init.log";
/// Initializer executable name, resolved from PATH
pub const DEFAULT_INITIALIZER: &str = "sdcinit";

/// Filesystem locations and the initializer program for one import run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPaths {
    pub archive: PathBuf,
    pub extract_dir: PathBuf,
    pub work_dir: PathBuf,
    pub log_file: PathBuf,
    pub initializer: PathBuf,
}

impl Default for ImportPaths {
    fn default() -> Self {
        Self {
            archive: PathBuf::from(DEFAULT_ARCHIVE_PATH),
            extract_dir: PathBuf::from(DEFAULT_EXTRACT_DIR),
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            initializer: PathBuf::from(DEFAULT_INITIALIZER),
        }
    }
}

impl ImportPaths {
    /// Same layout as the defaults, relocated under `root`.
    ///
    /// The initializer program is left untouched.
    pub fn rooted<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        let defaults = Self::default();
        let relocate = |p: &Path| root.join(p.strip_prefix("/").unwrap_or(p));

        Self {
            archive: relocate(&defaults.archive),
            extract_dir: relocate(&defaults.extract_dir),
            work_dir: relocate(&defaults.work_dir),
            log_file: relocate(&defaults.log_file),
            initializer: defaults.initializer,
        }
    }

    /// Expand `~` and `$VAR` references in user supplied paths
    pub fn expand(value: &str) -> crate::Result<PathBuf> {
        shellexpand::full(value)
            .map(|expanded| PathBuf::from(expanded.as_ref()))
            .map_err(|e| crate::error::ImportError::config(format!("Invalid path {}: {}", value, e)))
    }
}
