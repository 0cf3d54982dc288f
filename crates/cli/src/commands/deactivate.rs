//! Deactivate command: remove the stored license

use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

use crate::Cli;

pub fn run(cli: &Cli, yes: bool) -> Result<()> {
    if !yes && !confirm()? {
        eprintln!("  Cancelled.");
        return Ok(());
    }

    let mut manager = super::open_manager(cli)?;
    manager.deactivate()?;
    eprintln!(
        "  {} License removed. Activate a new key with {}",
        "\u{2713}".green(),
        "adzan-license activate <KEY>".bold()
    );
    Ok(())
}

fn confirm() -> Result<bool> {
    eprint!("  Remove the current license? All license data will be deleted. [y/N] ");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "ya")
}

#[cfg(test)]
mod tests {
    use super::is_yes;

    #[test]
    fn accepts_yes_variants() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(is_yes("ya"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
    }
}
