//! Status command: show the current license

use adzan_license_core::{ContactReason, Invalid};
use anyhow::Result;
use colored::Colorize;

use crate::output::{json, terminal};
use crate::Cli;

pub fn run(cli: &Cli, as_json: bool) -> Result<()> {
    let mut manager = super::open_manager(cli)?;
    let verdict = manager.validate();

    if as_json {
        return json::print(&manager.summary());
    }

    let Some(summary) = manager.summary() else {
        eprintln!("  {} {}", "\u{26a1}".yellow(), terminal::describe_invalid(Invalid::Missing));
        eprintln!("  Activate with {}", "adzan-license activate <KEY>".bold());
        eprintln!("  or buy a key (device {}):", manager.device_id().cyan());
        super::open_link(&manager.contact_link(&ContactReason::Purchase), false);
        eprintln!();
        return Ok(());
    };

    terminal::print_summary(&summary);

    match verdict.reason() {
        None => {}
        Some(Invalid::Expired) => {
            eprintln!("  {}", "Masa aktif aplikasi ini telah berakhir.".red().bold());
            eprintln!(
                "  Contact {} or renew via WhatsApp:",
                manager.config().contact.email.bold()
            );
            super::open_link(&manager.contact_link(&ContactReason::Renewal), false);
            eprintln!();
        }
        Some(_) => {
            eprintln!("  Activate with {}", "adzan-license activate <KEY>".bold());
            eprintln!();
        }
    }

    Ok(())
}
