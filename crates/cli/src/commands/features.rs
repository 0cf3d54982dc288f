//! Features command: show what a tier hides

use adzan_license_core::{packages, Tier};
use anyhow::Result;
use colored::Colorize;

use crate::output::terminal;
use crate::Cli;

pub fn run(cli: &Cli, tier: Option<&str>) -> Result<()> {
    if let Some(name) = tier {
        let Some(features) = packages::resolve_named(name) else {
            eprintln!("  {} Unknown package '{}'", "Error:".red().bold(), name);
            eprintln!("  Known packages: trial, basic, premium, vip");
            return Ok(());
        };
        terminal::print_features(&name.to_lowercase(), &features);
        return Ok(());
    }

    let manager = super::open_manager(cli)?;
    let tier = match manager.current() {
        Some(record) => record.package,
        None => {
            eprintln!("  No license is active; showing the trial package.");
            Tier::Trial
        }
    };
    terminal::print_features(tier.package().display_name, &packages::features(tier));
    Ok(())
}
