//! CLI commands

pub mod activate;
pub mod ads;
pub mod contact;
pub mod deactivate;
pub mod demo;
pub mod features;
pub mod init;
pub mod packages;
pub mod status;
pub mod upgrade;

use adzan_license_core::{FileStore, LicenseConfig, LicenseManager, SystemClock};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::Cli;

pub type Manager = LicenseManager<FileStore, SystemClock>;

/// Load configuration: `--config` if given, otherwise search upwards from the cwd.
pub fn load_config(cli: &Cli) -> Result<LicenseConfig> {
    match &cli.config {
        Some(path) => LicenseConfig::from_file(path)
            .with_context(|| format!("read config {}", path.display())),
        None => LicenseConfig::find_and_load(Path::new(".")),
    }
}

/// Storage directory: `--storage-dir`, then the config file, then the platform default.
pub fn storage_dir(cli: &Cli, config: &LicenseConfig) -> Result<PathBuf> {
    cli.storage_dir
        .clone()
        .or_else(|| config.storage.dir.clone())
        .or_else(FileStore::default_dir)
        .context("Could not determine a storage directory; pass --storage-dir")
}

/// Open the license manager over the file store.
pub fn open_manager(cli: &Cli) -> Result<Manager> {
    let config = load_config(cli)?;
    let dir = storage_dir(cli, &config)?;
    tracing::debug!(dir = %dir.display(), "opening license storage");
    LicenseManager::open(FileStore::new(dir), SystemClock, config)
        .context("open license storage")
}

/// Open a link in the system browser, printing it either way.
pub(crate) fn open_link(link: &str, open: bool) {
    use colored::Colorize;

    eprintln!("  {}", link.underline());
    if !open {
        return;
    }
    if let Err(e) = ::open::that(link) {
        eprintln!("  {} Could not open browser: {}", "Error:".red().bold(), e);
    }
}
