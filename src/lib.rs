//! fire2adium - Migrate Fire.app chat logs into Adium's log layout
//!
//! This library walks Fire's per-buddy session directories under
//! `~/Library/Application Support/Fire/Sessions`, parses each folder name into
//! a peer identifier and each log filename into a date, and copies every log
//! into Adium's log tree under a date-encoded filename. It supports:
//!
//! - Discovering conversation folders in Fire's `<peer>-<service>` naming
//! - Parsing the `<year>-<month>-<day>,<suffix>` log filename convention
//! - Atomic per-file copies with per-file failure isolation
//! - An end-of-run summary of copied, skipped, and failed files
//!
//! # Example
//!
//! ```no_run
//! use fire2adium::{MigrationConfig, migrate};
//! use std::path::PathBuf;
//!
//! let config = MigrationConfig {
//!     source_root: PathBuf::from("/Users/alice/Library/Application Support/Fire/Sessions"),
//!     destination_root: PathBuf::from("/tmp/adium-logs"),
//!     service_name: "AIM".to_string(),
//!     account_label: "Fire Import".to_string(),
//! };
//! let summary = migrate(&config)?;
//! println!("Copied {} files", summary.files_copied);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod migrator;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use config::MigrationConfig;
pub use migrator::runner::migrate;
pub use models::{ConversationFolder, LogDate, MigrationSummary};
pub use parsers::names::{destination_filename, parse_folder_name, parse_log_filename};
pub use utils::paths::format_path_with_tilde;
