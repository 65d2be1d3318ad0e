//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating Fire session directory trees
pub struct FireSessionsBuilder {
    temp_dir: TempDir,
}

impl FireSessionsBuilder {
    /// Create a new builder with an empty sessions directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the sessions directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a conversation folder containing the given (filename, content) logs
    pub fn with_folder(self, folder_name: &str, logs: &[(&str, &str)]) -> Self {
        let folder = self.temp_dir.path().join(folder_name);
        fs::create_dir_all(&folder).expect("Failed to create conversation folder");
        for (file_name, content) in logs {
            fs::write(folder.join(file_name), content).expect("Failed to write log file");
        }
        self
    }

    /// Add a nested directory inside a conversation folder
    pub fn with_nested_dir(self, folder_name: &str, nested: &str) -> Self {
        let dir = self.temp_dir.path().join(folder_name).join(nested);
        fs::create_dir_all(dir).expect("Failed to create nested dir");
        self
    }

    /// Add a stray plain file at the top level of the sessions directory
    pub fn with_stray_file(self, file_name: &str) -> Self {
        fs::write(self.temp_dir.path().join(file_name), "stray")
            .expect("Failed to write stray file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for FireSessionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create a realistic sessions directory with a few buddies
pub fn realistic_sessions_dir() -> TempDir {
    FireSessionsBuilder::new()
        .with_folder("alice-AIM", &[
            ("2011-05-09,log1.html", "hello"),
            ("2011-05-10,log2.html", "hello again"),
        ])
        .with_folder("bob-Jabber", &[("2012-01-01,chat.html", "happy new year")])
        .build()
}
