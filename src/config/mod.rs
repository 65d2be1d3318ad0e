//! Migration configuration.
//!
//! All paths and labels the migrator uses live in an explicit
//! [`MigrationConfig`], resolved once at startup from three layers:
//! command-line flags override an optional JSON config file, which overrides
//! the built-in defaults matching Fire's and Adium's standard install
//! locations. Nothing downstream reads the environment or hard-codes a path.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default chat service used to build the Adium destination root.
pub const DEFAULT_SERVICE_NAME: &str = "AIM";

/// Default Adium account label the imported logs are filed under.
pub const DEFAULT_ACCOUNT_LABEL: &str = "Fire Import";

/// Fully resolved configuration for one migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    /// Fire's session directory, one subdirectory per buddy.
    pub source_root: PathBuf,
    /// Adium's log root; the service/account scope directory is created below it.
    pub destination_root: PathBuf,
    /// Chat service name, e.g. `"AIM"`.
    pub service_name: String,
    /// Account label the destination directory is keyed by, e.g. `"Fire Import"`.
    pub account_label: String,
}

impl MigrationConfig {
    /// The directory all migrated logs land under:
    /// `<destination_root>/<service_name>.<account_label>`.
    pub fn destination_base(&self) -> PathBuf {
        self.destination_root.join(format!("{}.{}", self.service_name, self.account_label))
    }
}

/// Optional JSON config file; any subset of the fields may be present.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub source_root: Option<PathBuf>,
    pub destination_root: Option<PathBuf>,
    pub service_name: Option<String>,
    pub account_label: Option<String>,
}

impl ConfigFile {
    /// Load and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Fire's default session directory under the user's home.
pub fn default_source_root() -> Result<PathBuf> {
    Ok(home_dir()?.join("Library/Application Support/Fire/Sessions"))
}

/// Adium's default log root under the user's home.
pub fn default_destination_root() -> Result<PathBuf> {
    Ok(home_dir()?.join("Library/Application Support/Adium 2.0/Users/Default/Logs"))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine the home directory")
}

/// Resolve the final configuration from CLI overrides and an optional config
/// file. Precedence: CLI flag, then config file, then built-in default.
pub fn resolve_config(
    source_root: Option<PathBuf>,
    destination_root: Option<PathBuf>,
    service_name: Option<String>,
    account_label: Option<String>,
    file: ConfigFile,
) -> Result<MigrationConfig> {
    let source_root = match source_root.or(file.source_root) {
        Some(path) => path,
        None => default_source_root()?,
    };
    let destination_root = match destination_root.or(file.destination_root) {
        Some(path) => path,
        None => default_destination_root()?,
    };

    Ok(MigrationConfig {
        source_root,
        destination_root,
        service_name: service_name
            .or(file.service_name)
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        account_label: account_label
            .or(file.account_label)
            .unwrap_or_else(|| DEFAULT_ACCOUNT_LABEL.to_string()),
    })
}
