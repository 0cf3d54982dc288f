//! Demo command: time-boxed trial without a key

use anyhow::Result;
use colored::Colorize;

use crate::output::terminal;
use crate::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let mut manager = super::open_manager(cli)?;
    let minutes = manager.config().general.demo_minutes;
    let record = manager.start_demo()?;

    eprintln!(
        "  {} Demo mode active for {} minutes",
        "\u{2713}".green(),
        minutes.to_string().bold()
    );
    eprintln!("  {}: {}", "Ends".bold(), terminal::format_date(record.expiry));
    eprintln!();
    Ok(())
}
