// file: src/archive.rs
// version: 1.0.0
// guid: be1b1fbe-e1ed-4295-b182-9b07b95c1dd6

//! Staging and extraction of the normatives archive

use crate::error::ImportError;
use crate::Result;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Component, Path};
use tracing::{debug, info};

/// Copy `source` to the staged archive location, creating parent directories
pub fn stage_archive(source: &Path, staged: &Path) -> Result<u64> {
    if !source.is_file() {
        return Err(ImportError::archive(format!(
            "Source archive not found: {}",
            source.display()
        )));
    }

    if let Some(parent) = staged.parent() {
        fs::create_dir_all(parent)?;
    }

    let bytes = fs::copy(source, staged)?;
    info!(
        "Staged {} ({} bytes) at {}",
        source.display(),
        bytes,
        staged.display()
    );
    Ok(bytes)
}

/// Extract a `.tar.gz` archive into `target_dir`, returning the number of files written
pub fn extract_tar_gz(archive: &Path, target_dir: &Path) -> Result<u32> {
    let file = File::open(archive).map_err(|e| {
        ImportError::archive(format!(
            "Failed to open archive {}: {}",
            archive.display(),
            e
        ))
    })?;

    fs::create_dir_all(target_dir)?;

    let decoder = GzDecoder::new(BufReader::new(file));
    let mut tarball = tar::Archive::new(decoder);
    let mut file_count = 0u32;

    for entry in tarball
        .entries()
        .map_err(|e| ImportError::archive(format!("Failed to read archive entries: {}", e)))?
    {
        let mut entry =
            entry.map_err(|e| ImportError::archive(format!("Failed to read archive entry: {}", e)))?;

        let path = entry
            .path()
            .map_err(|e| ImportError::archive(format!("Failed to get entry path: {}", e)))?
            .into_owned();

        if !is_contained(&path) {
            return Err(ImportError::archive(format!(
                "Archive entry escapes extraction directory: {}",
                path.display()
            )));
        }

        let is_dir = entry.header().entry_type().is_dir();
        let unpacked = entry.unpack_in(target_dir).map_err(|e| {
            ImportError::archive(format!("Failed to extract {}: {}", path.display(), e))
        })?;
        if !unpacked {
            return Err(ImportError::archive(format!(
                "Archive entry escapes extraction directory: {}",
                path.display()
            )));
        }
        if is_dir {
            continue;
        }

        debug!("x {}", path.display());
        file_count += 1;
    }

    info!(
        "Extracted {} files from {} into {}",
        file_count,
        archive.display(),
        target_dir.display()
    );
    Ok(file_count)
}

/// Relative path without parent or root components
fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::TempDir;

    fn write_tar_gz(path: &Path, files: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for (name, content) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, content.as_bytes())
                .unwrap();
        }

        builder.into_inner().unwrap().finish().unwrap();
    }

    #[test]
    fn test_extract_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("normatives.tar.gz");
        write_tar_gz(
            &archive,
            &[
                ("normatives/import/tosca/types.yml", "tosca_definitions_version: 1"),
                ("normatives/import/tosca/data.json", "{}"),
            ],
        );

        let out = temp_dir.path().join("out");
        let count = extract_tar_gz(&archive, &out).unwrap();

        assert_eq!(count, 2);
        let content =
            fs::read_to_string(out.join("normatives/import/tosca/types.yml")).unwrap();
        assert_eq!(content, "tosca_definitions_version: 1");
    }

    #[test]
    fn test_missing_archive_is_archive_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = extract_tar_gz(&temp_dir.path().join("absent.tar.gz"), temp_dir.path());
        assert!(matches!(result, Err(ImportError::Archive(_))));
    }

    #[test]
    fn test_not_gzip_is_archive_error() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("plain.tar.gz");
        fs::write(&archive, b"definitely not gzip").unwrap();

        let result = extract_tar_gz(&archive, &temp_dir.path().join("out"));
        assert!(matches!(result, Err(ImportError::Archive(_))));
    }

    fn write_raw_tar_gz(path: &Path, build: impl FnOnce(&mut tar::Builder<GzEncoder<File>>)) {
        let encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        build(&mut builder);
        builder.into_inner().unwrap().finish().unwrap();
    }

    fn regular_header(size: usize) -> tar::Header {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Regular);
        header.set_size(size as u64);
        header.set_mode(0o644);
        header
    }

    #[test]
    fn test_parent_dir_entry_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("escape.tar.gz");
        write_raw_tar_gz(&archive, |builder| {
            let body = b"escaped";
            let mut header = regular_header(body.len());
            // append_data refuses `..`, so write the name bytes directly
            let name = b"../escape.txt";
            header.as_old_mut().name[..name.len()].copy_from_slice(name);
            header.set_cksum();
            builder.append(&header, &body[..]).unwrap();
        });

        let out = temp_dir.path().join("out");
        let result = extract_tar_gz(&archive, &out);

        assert!(matches!(result, Err(ImportError::Archive(_))));
        assert!(!temp_dir.path().join("escape.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_through_symlink_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let outside = temp_dir.path().join("outside");
        fs::create_dir_all(&outside).unwrap();

        let archive = temp_dir.path().join("symlink.tar.gz");
        write_raw_tar_gz(&archive, |builder| {
            let mut link = tar::Header::new_gnu();
            link.set_entry_type(tar::EntryType::Symlink);
            link.set_size(0);
            link.set_mode(0o777);
            builder.append_link(&mut link, "normatives", &outside).unwrap();

            let body = b"evil";
            let mut header = regular_header(body.len());
            builder
                .append_data(&mut header, "normatives/evil.txt", &body[..])
                .unwrap();
        });

        let out = temp_dir.path().join("out");
        let result = extract_tar_gz(&archive, &out);

        assert!(matches!(result, Err(ImportError::Archive(_))));
        assert!(!outside.join("evil.txt").exists());
    }

    #[test]
    fn test_hard_link_resolves_inside_target_dir() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("hardlink.tar.gz");
        write_raw_tar_gz(&archive, |builder| {
            let body = b"node_types: {}";
            let mut header = regular_header(body.len());
            builder
                .append_data(&mut header, "normatives/types.yml", &body[..])
                .unwrap();

            let mut link = tar::Header::new_gnu();
            link.set_entry_type(tar::EntryType::Link);
            link.set_size(0);
            link.set_mode(0o644);
            builder
                .append_link(&mut link, "normatives/alias.yml", "normatives/types.yml")
                .unwrap();
        });

        // the test process runs from the crate root, not from `out`
        let out = temp_dir.path().join("out");
        let count = extract_tar_gz(&archive, &out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            fs::read_to_string(out.join("normatives/alias.yml")).unwrap(),
            "node_types: {}"
        );
    }

    #[test]
    fn test_containment_check() {
        assert!(is_contained(Path::new("normatives/import")));
        assert!(is_contained(Path::new("./normatives")));
        assert!(!is_contained(Path::new("../etc/passwd")));
        assert!(!is_contained(Path::new("a/../../b")));
        assert!(!is_contained(Path::new("/etc/passwd")));
    }

    #[test]
    fn test_stage_archive_copies_into_new_directory() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.tar.gz");
        fs::write(&source, b"payload").unwrap();

        let staged = temp_dir.path().join("var/tmp/normatives.tar.gz");
        let bytes = stage_archive(&source, &staged).unwrap();

        assert_eq!(bytes, 7);
        assert_eq!(fs::read(&staged).unwrap(), b"payload");
    }

    #[test]
    fn test_stage_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let result = stage_archive(
            &temp_dir.path().join("nope.tar.gz"),
            &temp_dir.path().join("staged.tar.gz"),
        );
        assert!(matches!(result, Err(ImportError::Archive(_))));
    }
}
