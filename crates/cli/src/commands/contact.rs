//! Contact command: WhatsApp link to buy or renew a license

use adzan_license_core::ContactReason;
use anyhow::Result;
use colored::Colorize;

use crate::Cli;

pub fn run(cli: &Cli, renew: bool, open: bool) -> Result<()> {
    let manager = super::open_manager(cli)?;
    let reason = if renew {
        ContactReason::Renewal
    } else {
        ContactReason::Purchase
    };

    eprintln!("  {}: {}", "Device ID".bold(), manager.device_id().cyan());
    eprintln!("  {}: {}", "Email".bold(), manager.config().contact.email);
    super::open_link(&manager.contact_link(&reason), open);
    eprintln!();
    Ok(())
}
