use std::fs::{self, File};
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::config::MigrationConfig;
use crate::migrator::discovery::{discover_conversation_folders, list_log_files};
use crate::models::{ConversationFolder, MigrationSummary};
use crate::parsers::names::{destination_filename, parse_folder_name, parse_log_filename};

/// Run one full migration pass
///
/// Walks every conversation folder under the configured source root and
/// copies each log into the Adium layout:
/// `<destination_root>/<service>.<label>/<peer>/<peer> (<y>|<m>|<d>).html`.
/// Existing destination files are overwritten (last-write-wins), so re-running
/// against an unchanged source is idempotent.
///
/// # Errors
///
/// Returns an error only for setup failures: a missing/unreadable source root
/// or a destination base that cannot be created. Per-folder and per-file
/// problems are logged to stderr, counted in the returned summary, and
/// skipped.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use fire2adium::{MigrationConfig, migrate};
///
/// let config = MigrationConfig {
///     source_root: PathBuf::from("/Users/alice/Library/Application Support/Fire/Sessions"),
///     destination_root: PathBuf::from("/tmp/adium-logs"),
///     service_name: "AIM".to_string(),
///     account_label: "Fire Import".to_string(),
/// };
/// let summary = migrate(&config)?;
/// println!("{} copied, {} failed", summary.files_copied, summary.files_failed);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn migrate(config: &MigrationConfig) -> Result<MigrationSummary> {
    let folders = discover_conversation_folders(&config.source_root)?;

    let destination_base = config.destination_base();
    fs::create_dir_all(&destination_base).with_context(|| {
        format!("Failed to create destination root: {}", destination_base.display())
    })?;

    let mut summary = MigrationSummary::default();
    for folder in &folders {
        migrate_folder(folder, &destination_base, &mut summary);
    }

    Ok(summary)
}

/// Migrate every log in one conversation folder. Failures are counted in the
/// summary, never propagated.
fn migrate_folder(
    folder: &ConversationFolder,
    destination_base: &Path,
    summary: &mut MigrationSummary,
) {
    let peer = match parse_folder_name(&folder.dir_name) {
        Ok(parsed) => parsed.peer,
        Err(e) => {
            eprintln!("Warning: Skipping folder {}: {}", folder.dir_name, e);
            summary.folders_skipped += 1;
            return;
        }
    };

    // Idempotent create: an already-existing peer directory is success
    let peer_dir = destination_base.join(&peer);
    if let Err(e) = fs::create_dir_all(&peer_dir) {
        eprintln!(
            "Warning: Skipping folder {}: cannot create {}: {}",
            folder.dir_name,
            peer_dir.display(),
            e
        );
        summary.folders_skipped += 1;
        return;
    }

    let files = match list_log_files(&folder.path) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Warning: Skipping folder {}: {}", folder.dir_name, e);
            summary.folders_skipped += 1;
            return;
        }
    };

    summary.folders_processed += 1;

    for source_file in &files {
        let file_name = match source_file.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        let date = match parse_log_filename(&file_name) {
            Ok(date) => date,
            Err(e) => {
                eprintln!("Warning: Skipping file {}: {}", source_file.display(), e);
                summary.files_skipped += 1;
                continue;
            }
        };

        let destination = peer_dir.join(destination_filename(&peer, &date));
        match copy_into_place(source_file, &destination) {
            Ok(()) => summary.files_copied += 1,
            Err(e) => {
                eprintln!("Warning: Failed to copy {}: {}", source_file.display(), e);
                summary.files_failed += 1;
            }
        }
    }
}

/// Copy a file's full byte content without ever exposing a partial write.
///
/// The content is staged into a temp file beside the destination and renamed
/// into place; rename replaces any existing file, giving last-write-wins
/// overwrite semantics. If anything fails mid-copy the temp file is removed
/// on drop and the destination is untouched.
fn copy_into_place(source: &Path, destination: &Path) -> Result<()> {
    let destination_dir = destination
        .parent()
        .with_context(|| format!("Destination has no parent directory: {}", destination.display()))?;

    let mut reader = File::open(source)
        .with_context(|| format!("Failed to open source file: {}", source.display()))?;

    let mut staged = NamedTempFile::new_in(destination_dir)
        .with_context(|| format!("Failed to stage temp file in {}", destination_dir.display()))?;
    io::copy(&mut reader, staged.as_file_mut())
        .with_context(|| format!("Failed to copy content of {}", source.display()))?;

    // The temp file is created owner-only; give the copy the source file's
    // permissions, as a plain copy would
    let permissions = reader
        .metadata()
        .with_context(|| format!("Failed to read metadata of {}", source.display()))?
        .permissions();
    staged
        .as_file()
        .set_permissions(permissions)
        .with_context(|| format!("Failed to set permissions on copy of {}", source.display()))?;

    staged
        .persist(destination)
        .with_context(|| format!("Failed to move copy into place at {}", destination.display()))?;

    Ok(())
}
