//! Adzan License CLI library: exposed for integration tests

pub mod commands;
pub mod logging;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adzan-license")]
#[command(about = "License and feature gating for the Adzan prayer-time display", long_about = None)]
#[command(version = adzan_license_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: .adzan-license.toml in this or a parent directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding license state (default: platform config dir)
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current license (default command)
    Status {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Activate a license key
    Activate {
        /// License key, e.g. RH-MTV-1Q2W3E
        key: String,
    },

    /// Start a short demo of the trial package
    Demo,

    /// Remove the stored license
    Deactivate {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List packages and prices
    Packages,

    /// Show the feature restrictions of a package
    Features {
        /// Package tier (default: current license)
        tier: Option<String>,
    },

    /// Check upgrade options or request an upgrade
    Upgrade {
        /// Target package tier; omit to list options
        tier: Option<String>,

        /// Open the WhatsApp link in the browser
        #[arg(long)]
        open: bool,
    },

    /// Contact the seller to buy or renew a license
    Contact {
        /// Ask for a renewal instead of a new purchase
        #[arg(long)]
        renew: bool,

        /// Open the WhatsApp link in the browser
        #[arg(long)]
        open: bool,
    },

    /// Run the ad timer for the current tier until Ctrl-C
    Ads {
        /// Pretend a full-screen overlay is visible
        #[arg(long)]
        overlay: bool,
    },

    /// Initialize .adzan-license.toml configuration
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<PathBuf>,
    },
}
