//! Adzan License CLI

use adzan_license_cli::{commands, logging, Cli, Commands};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Status { json }) => commands::status::run(&cli, json)?,
        Some(Commands::Activate { ref key }) => commands::activate::run(&cli, key)?,
        Some(Commands::Demo) => commands::demo::run(&cli)?,
        Some(Commands::Deactivate { yes }) => commands::deactivate::run(&cli, yes)?,
        Some(Commands::Packages) => commands::packages::run(&cli)?,
        Some(Commands::Features { ref tier }) => commands::features::run(&cli, tier.as_deref())?,
        Some(Commands::Upgrade { ref tier, open }) => {
            commands::upgrade::run(&cli, tier.as_deref(), open)?
        }
        Some(Commands::Contact { renew, open }) => commands::contact::run(&cli, renew, open)?,
        Some(Commands::Ads { overlay }) => commands::ads::run(&cli, overlay)?,
        Some(Commands::Init { ref path }) => commands::init::run(path.as_deref())?,
        None => commands::status::run(&cli, false)?,
    }

    Ok(())
}
