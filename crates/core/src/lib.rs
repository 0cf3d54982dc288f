//! Adzan License Core - license tiers and feature gating
//!
//! This crate holds the license logic for the Adzan prayer-time display:
//! - Package tiers and the feature bundle each one unlocks
//! - Key format checks against a compiled-in allow-list
//! - License record persistence with a legacy-shape migration path
//! - Validation, activation, demo mode and upgrade requests
//! - Ad scheduling for tiers that show ads

pub mod ads;
pub mod clock;
pub mod config;
pub mod contact;
pub mod device;
pub mod error;
pub mod keys;
pub mod manager;
pub mod packages;
pub mod record;
pub mod restrictions;
pub mod store;
pub mod upgrade;
pub mod validator;

pub use ads::{AdScheduler, AdSink, AdTimer, HideReason, Schedule, TickOutcome};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::LicenseConfig;
pub use contact::ContactReason;
pub use error::LicenseError;
pub use keys::{KeyFormat, KeyTable};
pub use manager::{Activation, LicenseManager, LicenseSummary, LoadSource, StatusLabel};
pub use packages::{
    features, package, AdPolicy, FeatureBundle, OverlayBehavior, PackageDefinition, Tier,
};
pub use record::{LicenseRecord, LicenseStatus};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use validator::{Invalid, Validator, Verdict};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
