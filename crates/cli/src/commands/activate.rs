//! Activate command: enter a license key

use anyhow::Result;
use colored::Colorize;

use crate::output::terminal;
use crate::Cli;

pub fn run(cli: &Cli, key: &str) -> Result<()> {
    let mut manager = super::open_manager(cli)?;

    eprint!("  Activating... ");
    match manager.activate(key) {
        Ok(activation) => {
            eprintln!("{}", "done".green());
            eprintln!();
            eprintln!(
                "  {} {} activated for {}",
                "\u{2713}".green(),
                activation.package.to_string().cyan().bold(),
                terminal::format_duration_days(activation.days),
            );
            eprintln!("  {}: {}", "Expires".bold(), terminal::format_date(activation.expiry));
            eprintln!();
        }
        Err(e) => {
            eprintln!("{}", "failed".red());
            return Err(e.into());
        }
    }

    Ok(())
}
