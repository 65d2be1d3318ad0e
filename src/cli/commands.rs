use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{ConfigFile, MigrationConfig, resolve_config};
use crate::migrator::migrate;
use crate::models::MigrationSummary;
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "fire2adium")]
#[command(version = "0.1.0")]
#[command(about = "Migrate Fire.app chat logs into Adium's log layout", long_about = None)]
pub struct Cli {
    /// Fire session directory to read logs from
    /// [default: ~/Library/Application Support/Fire/Sessions]
    #[arg(long, value_name = "PATH")]
    pub source_root: Option<PathBuf>,

    /// Adium log root to write into
    /// [default: ~/Library/Application Support/Adium 2.0/Users/Default/Logs]
    #[arg(long, value_name = "PATH")]
    pub destination_root: Option<PathBuf>,

    /// Chat service name used to scope the destination [default: AIM]
    #[arg(long, value_name = "NAME")]
    pub service: Option<String>,

    /// Adium account label the imported logs are filed under
    /// [default: Fire Import]
    #[arg(long, value_name = "LABEL")]
    pub account_label: Option<String>,

    /// JSON config file; command-line flags take precedence over its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let config = resolve_config(
        cli.source_root,
        cli.destination_root,
        cli.service,
        cli.account_label,
        file,
    )?;

    let summary = migrate(&config)?;
    print_summary(&config, &summary);

    Ok(())
}

fn print_summary(config: &MigrationConfig, summary: &MigrationSummary) {
    println!("Fire to Adium Log Migration");
    println!("===========================");
    println!("Source: {}", format_path_with_tilde(&config.source_root));
    println!("Destination: {}", format_path_with_tilde(&config.destination_base()));
    println!();
    println!("Folders processed: {}", summary.folders_processed);
    println!("Folders skipped: {}", summary.folders_skipped);
    println!("Files seen: {}", summary.files_seen());
    println!("Files copied: {}", summary.files_copied);
    println!("Files skipped (malformed name): {}", summary.files_skipped);
    println!("Files failed (I/O error): {}", summary.files_failed);
}
