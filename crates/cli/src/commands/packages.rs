//! Packages command: list tiers and prices

use adzan_license_core::packages;
use anyhow::Result;
use colored::Colorize;

use crate::output::terminal;
use crate::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let manager = super::open_manager(cli)?;
    let current = manager.current().map(|r| r.package);

    eprintln!("  {}", "Packages".bold());
    for pkg in packages::catalog() {
        eprintln!("{}", terminal::format_package_row(&pkg, current == Some(pkg.tier)));
    }
    eprintln!();
    Ok(())
}
