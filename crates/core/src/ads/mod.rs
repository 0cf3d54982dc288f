//! Ad scheduling for tiers that show ads
//!
//! `AdScheduler` is the two-state machine (Idle / ShowingAd). It never looks at
//! the clock itself; callers pass `Instant`s in. `AdTimer` drives it from a
//! background thread and hands show/hide events to an `AdSink`.

pub mod timer;

pub use timer::{AdSink, AdTimer, HideReason};

use std::time::{Duration, Instant};

use crate::packages::{AdPolicy, OverlayBehavior};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdState {
    Idle,
    ShowingAd {
        image: Option<String>,
        until: Instant,
    },
}

/// Result of a scheduler tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Shown { image: Option<String> },
    /// A full-screen overlay is up and ads stay behind it.
    Suppressed,
    /// An ad is already on screen; ticks do not queue.
    AlreadyShowing,
    Disabled,
}

/// Timings for the timer thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// One-shot tick after startup.
    pub first_delay: Duration,
    /// Recurring tick period.
    pub period: Duration,
}

impl Schedule {
    /// `None` when the policy has ads disabled.
    pub fn from_policy(policy: &AdPolicy, first_delay: Duration) -> Option<Self> {
        match *policy {
            AdPolicy::Disabled => None,
            AdPolicy::Enabled {
                interval_minutes, ..
            } => Some(Self {
                first_delay,
                period: Duration::from_secs(interval_minutes * 60),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdScheduler {
    policy: AdPolicy,
    images: Vec<String>,
    next_image: usize,
    display: Duration,
    state: AdState,
}

impl AdScheduler {
    pub fn new(policy: AdPolicy, images: Vec<String>) -> Self {
        let display = match policy {
            AdPolicy::Enabled { duration_secs, .. } => Duration::from_secs(duration_secs),
            AdPolicy::Disabled => Duration::ZERO,
        };
        Self {
            policy,
            images,
            next_image: 0,
            display,
            state: AdState::Idle,
        }
    }

    /// Override how long each ad stays up.
    pub fn with_display(mut self, display: Duration) -> Self {
        self.display = display;
        self
    }

    pub fn display(&self) -> Duration {
        self.display
    }

    pub fn policy(&self) -> &AdPolicy {
        &self.policy
    }

    pub fn state(&self) -> &AdState {
        &self.state
    }

    pub fn is_showing(&self) -> bool {
        matches!(self.state, AdState::ShowingAd { .. })
    }

    /// Timer fired: show an ad unless suppressed, disabled or already showing.
    pub fn tick(&mut self, now: Instant, overlay_visible: bool) -> TickOutcome {
        let AdPolicy::Enabled { overlay, .. } = self.policy else {
            return TickOutcome::Disabled;
        };

        if overlay_visible && overlay == OverlayBehavior::Behind {
            tracing::debug!("ad suppressed behind full-screen overlay");
            return TickOutcome::Suppressed;
        }
        if self.is_showing() {
            return TickOutcome::AlreadyShowing;
        }

        let image = self.pick_image();
        self.state = AdState::ShowingAd {
            image: image.clone(),
            until: now + self.display,
        };
        TickOutcome::Shown { image }
    }

    /// Time left on the visible ad.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match &self.state {
            AdState::Idle => None,
            AdState::ShowingAd { until, .. } => Some(until.saturating_duration_since(now)),
        }
    }

    /// When the visible ad is due to close.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.state {
            AdState::Idle => None,
            AdState::ShowingAd { until, .. } => Some(*until),
        }
    }

    /// Close the ad if its display time is over. Returns true if it closed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(until) if now >= until => {
                self.state = AdState::Idle;
                true
            }
            _ => false,
        }
    }

    /// User clicked the ad. Returns true if an ad was closed.
    pub fn dismiss(&mut self) -> bool {
        let was_showing = self.is_showing();
        self.state = AdState::Idle;
        was_showing
    }

    fn pick_image(&mut self) -> Option<String> {
        if self.images.is_empty() {
            return None;
        }
        let image = self.images[self.next_image % self.images.len()].clone();
        self.next_image = (self.next_image + 1) % self.images.len();
        Some(image)
    }
}
