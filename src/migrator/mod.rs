//! The migration pass: discovery plus the copy loop
//!
//! # Error Handling Strategy
//!
//! The migrator combines two failure tiers:
//!
//! - **Setup failures are fatal**: a missing or unreadable source root, or a
//!   destination base that cannot be created, aborts the run before anything
//!   is written. Nothing is migrated and the process exits nonzero.
//!
//! - **Everything else is isolated**: a malformed folder name, a malformed
//!   log filename, or an I/O error copying one file is logged to stderr,
//!   counted in the [`MigrationSummary`](crate::models::MigrationSummary),
//!   and skipped. The rest of the run continues, so one corrupted log never
//!   blocks an entire account's migration.
//!
//! Copies are staged through a temp file in the destination directory and
//! renamed into place, so a failure mid-copy never leaves a truncated
//! destination file behind.

pub mod discovery;
pub mod runner;

pub use discovery::{discover_conversation_folders, list_log_files};
pub use runner::migrate;
