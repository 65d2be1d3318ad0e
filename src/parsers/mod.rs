//! Parsers for Fire's directory and filename conventions
//!
//! # Error Handling Strategy
//!
//! Parsing here is strict where the reference importer was silently lenient:
//!
//! - A session folder name without a `-` separator (or with an empty peer
//!   part) is an error. The original script unpacked the split result without
//!   checking it and would silently emit a truncated identifier; callers of
//!   these parsers skip the item with a warning instead.
//!
//! - A log filename whose date token does not split into exactly three parts
//!   is an error. Callers skip the file and keep going, so a single oddly
//!   named log never blocks the rest of a migration.
//!
//! Errors use `anyhow` and carry the offending name, since they surface only
//! as stderr warnings and summary counters, never as matchable types.

pub mod names;

pub use names::{destination_filename, parse_folder_name, parse_log_filename};
