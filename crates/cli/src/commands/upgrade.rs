//! Upgrade command: list upgrade prices or record an upgrade request

use adzan_license_core::contact::format_rupiah;
use adzan_license_core::{LicenseError, Tier};
use anyhow::Result;
use colored::Colorize;

use crate::Cli;

pub fn run(cli: &Cli, tier: Option<&str>, open: bool) -> Result<()> {
    let mut manager = super::open_manager(cli)?;

    let Some(name) = tier else {
        return list_options(&manager);
    };

    let target: Tier = name.parse()?;
    match manager.request_upgrade(target) {
        Ok(offer) => {
            eprintln!(
                "  {} Upgrade to {} requested: {}",
                "\u{2713}".green(),
                target.to_string().cyan().bold(),
                format_rupiah(offer.request.price).bold()
            );
            eprintln!("  Send the request via WhatsApp to receive your new key:");
            super::open_link(&offer.link, open);
            eprintln!();
        }
        Err(e @ (LicenseError::NotAnUpgrade { .. } | LicenseError::AlreadyTopTier(_))) => {
            eprintln!("  {} {}", "\u{26a1}".yellow(), e);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn list_options(manager: &super::Manager) -> Result<()> {
    let current = match manager.eligibility() {
        Ok(eligibility) => {
            eprintln!(
                "  {}: {} ({} days left)",
                "Current".bold(),
                eligibility.current.to_string().cyan(),
                eligibility.days_left
            );
            if let Some(rec) = &eligibility.recommendation {
                eprintln!("  {} {}", "\u{26a1}".yellow(), rec);
            }
            Some(eligibility.current)
        }
        Err(LicenseError::AlreadyTopTier(tier)) => {
            eprintln!("  You already have the highest package ({}).", tier.to_string().cyan());
            return Ok(());
        }
        Err(LicenseError::NoLicense) => None,
        Err(e) => return Err(e.into()),
    };

    eprintln!("  {}", "Upgrade options".bold());
    for tier in Tier::ALL.into_iter().filter(|t| current.map_or(true, |c| *t > c)) {
        eprintln!(
            "    {:<10} {:>14}   adzan-license upgrade {}",
            tier.to_string(),
            format_rupiah(manager.upgrade_price(tier)),
            tier.as_str()
        );
    }
    eprintln!();
    Ok(())
}
