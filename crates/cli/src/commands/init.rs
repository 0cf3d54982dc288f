//! Initialize .adzan-license.toml configuration

use adzan_license_core::config::CONFIG_FILENAME;
use adzan_license_core::LicenseConfig;
use anyhow::Result;
use std::path::Path;

pub fn run(path: Option<&Path>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| Path::new("."));
    let config_path = target_path.join(CONFIG_FILENAME);

    if config_path.exists() {
        println!("⚠️  {} already exists at {:?}", CONFIG_FILENAME, config_path);
        return Ok(());
    }

    LicenseConfig::default().save(&config_path)?;

    println!("✅ Created {} at {:?}", CONFIG_FILENAME, config_path);
    println!("\nSet your WhatsApp number and ad images, then run:");
    println!("  adzan-license status");

    Ok(())
}
