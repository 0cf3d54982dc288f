//! Ads command: run the ad timer in the terminal until Ctrl-C

use adzan_license_core::{AdSink, AdTimer, HideReason};
use anyhow::Result;
use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::Cli;

/// Prints ad events instead of drawing an overlay.
pub struct TerminalSink {
    overlay: bool,
}

impl TerminalSink {
    pub fn new(overlay: bool) -> Self {
        Self { overlay }
    }
}

impl AdSink for TerminalSink {
    fn show(&mut self, image: Option<&str>, duration: Duration) {
        eprintln!(
            "  {} showing {} for {}s",
            "\u{25b6}".yellow(),
            image.unwrap_or("ad").bold(),
            duration.as_secs()
        );
    }

    fn hide(&mut self, reason: HideReason) {
        let why = match reason {
            HideReason::Elapsed => "time up",
            HideReason::Dismissed => "dismissed",
            HideReason::Cancelled => "cancelled",
        };
        eprintln!("  {} ad closed ({})", "\u{25a0}".dimmed(), why);
    }

    fn overlay_visible(&self) -> bool {
        self.overlay
    }
}

pub fn run(cli: &Cli, overlay: bool) -> Result<()> {
    let manager = super::open_manager(cli)?;

    let Some((scheduler, schedule)) = manager.ad_schedule() else {
        eprintln!("  No ads for the current license.");
        return Ok(());
    };

    eprintln!(
        "  {}",
        format!(
            "Ads every {} min, first in {}s (Ctrl-C to stop)",
            schedule.period.as_secs() / 60,
            schedule.first_delay.as_secs()
        )
        .dimmed()
    );

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    let timer = AdTimer::spawn(scheduler, schedule, TerminalSink::new(overlay));
    while running.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(200));
    }
    timer.cancel();

    eprintln!();
    eprintln!("  {}", "Stopped.".bold());
    Ok(())
}
