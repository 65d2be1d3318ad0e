use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::models::ConversationFolder;

/// Discover all conversation folders directly under the Fire source root
///
/// Each subdirectory of the source root holds one buddy's session logs. Plain
/// files at the top level are ignored. Results are sorted lexicographically by
/// name so runs are deterministic regardless of filesystem enumeration order.
///
/// # Errors
///
/// Returns an error if the source root does not exist, is not a directory, or
/// cannot be read. These are setup failures that abort the whole run.
pub fn discover_conversation_folders(source_root: &Path) -> Result<Vec<ConversationFolder>> {
    if !source_root.is_dir() {
        bail!("Source root does not exist or is not a directory: {}", source_root.display());
    }

    let entries = fs::read_dir(source_root)
        .with_context(|| format!("Failed to read source root: {}", source_root.display()))?;

    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read source root entry")?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        let dir_name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        folders.push(ConversationFolder { dir_name, path });
    }

    folders.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    Ok(folders)
}

/// List the plain files directly inside one conversation folder
///
/// Nested directories are unexpected in a Fire session folder and are skipped,
/// never recursed into. Results are sorted lexicographically by filename.
///
/// # Errors
///
/// Returns an error if the folder cannot be read. Callers treat this as a
/// per-folder failure, not a fatal one.
pub fn list_log_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(folder)
        .with_context(|| format!("Failed to read conversation folder: {}", folder.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read conversation folder entry")?;
        let path = entry.path();

        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
