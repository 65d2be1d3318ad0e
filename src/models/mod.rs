//! Data models for the Fire-to-Adium log migration.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`ConversationFolder`] - One Fire session directory (one buddy/room)
//! - [`PeerFolder`] - A folder name parsed into peer identifier and service tag
//! - [`LogDate`] - The date token parsed from a Fire log filename
//! - [`MigrationSummary`] - Counters reported at the end of a run
//!
//! All of these are plain value types; the migrator holds no state beyond the
//! folder and file currently being processed.

pub mod conversation;
pub mod summary;

pub use conversation::{ConversationFolder, LogDate, PeerFolder};
pub use summary::MigrationSummary;
