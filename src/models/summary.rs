/// Counters accumulated over one migration run and reported at the end.
///
/// Per-folder and per-file problems never abort the run; they only increment
/// a counter here, so one corrupted log cannot block the rest of an account's
/// migration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Folders whose contents were migrated (name parsed, directory created).
    pub folders_processed: usize,
    /// Folders skipped because of a malformed name or an unreadable directory.
    pub folders_skipped: usize,
    /// Files copied successfully.
    pub files_copied: usize,
    /// Files skipped because the filename's date token was malformed.
    pub files_skipped: usize,
    /// Files that failed with an I/O error during the copy.
    pub files_failed: usize,
}

impl MigrationSummary {
    /// Total number of files the run attempted to migrate.
    pub fn files_seen(&self) -> usize {
        self.files_copied + self.files_skipped + self.files_failed
    }
}
