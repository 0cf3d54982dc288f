//! License lifecycle: load, validate, activate, demo, deactivate, upgrade
//!
//! `LicenseManager` is the context object the page (or the CLI) holds. It owns
//! the store, the clock and the configuration; nothing here is global.
//! Every mutation writes to storage first and only then updates memory, so a
//! failed write leaves the manager unchanged.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ads::{AdScheduler, Schedule};
use crate::clock::Clock;
use crate::config::LicenseConfig;
use crate::contact::{self, ContactReason};
use crate::device;
use crate::error::{LicenseError, Result};
use crate::keys::{self, KeyFormat, KeyTable};
use crate::packages::{self, FeatureBundle, Tier};
use crate::record::{LicenseRecord, LicenseStatus};
use crate::restrictions;
use crate::store::{self, KeyValueStore, Loaded, FIRST_OPEN_KEY};
use crate::upgrade::{self, Eligibility, UpgradeRequest};
use crate::validator::{Invalid, Validator, Verdict};

/// Above this many days left a license reads as plainly active.
const EXPIRING_SOON_DAYS: i64 = 7;

/// Where the record in memory came from on the last load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSource {
    Current,
    Migrated,
    Missing,
    /// Stored JSON was corrupt and a fresh trial record replaced it.
    ResetToTrial,
}

/// Result of a successful activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activation {
    pub package: Tier,
    pub expiry: DateTime<Utc>,
    pub days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLabel {
    Active,
    ExpiringSoon,
    Expired,
}

/// What the license info panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseSummary {
    pub package: Tier,
    pub package_name: &'static str,
    pub status: LicenseStatus,
    pub label: StatusLabel,
    pub start_date: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub days_left: i64,
    pub verdict: Verdict,
}

/// A recorded upgrade request plus the link to send it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeOffer {
    pub request: UpgradeRequest,
    pub link: String,
}

pub struct LicenseManager<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
    config: LicenseConfig,
    validator: Validator,
    device_id: String,
    current: Option<LicenseRecord>,
    source: LoadSource,
}

impl<S: KeyValueStore, C: Clock> LicenseManager<S, C> {
    /// Open the manager and load whatever license is stored.
    pub fn open(store: S, clock: C, config: LicenseConfig) -> Result<Self> {
        let validator = Validator::new(
            KeyFormat::new(&config.general.key_prefix),
            KeyTable::builtin(),
        );
        if let Some(grant) = validator
            .table()
            .iter()
            .find(|g| !validator.format().is_valid(g.key))
        {
            tracing::debug!(key = grant.key, "built-in key fails configured format");
            return Err(LicenseError::PrefixMismatch {
                prefix: config.general.key_prefix.clone(),
            });
        }
        let device_id = device::load_or_create(&store, clock.now())?;

        let mut manager = Self {
            store,
            clock,
            config,
            validator,
            device_id,
            current: None,
            source: LoadSource::Missing,
        };
        manager.reload()?;
        Ok(manager)
    }

    /// Re-read the record from storage.
    ///
    /// Corrupt JSON is replaced by a fresh trial record. A legacy record is
    /// converted and written back in the canonical shape.
    pub fn reload(&mut self) -> Result<LoadSource> {
        let (current, source) = match store::load_record(&self.store, &self.device_id)? {
            Loaded::Current(record) => {
                tracing::debug!(package = %record.package.as_str(), "license loaded");
                (Some(record), LoadSource::Current)
            }
            Loaded::Migrated(record) => {
                tracing::info!(package = %record.package.as_str(), "migrating legacy license record");
                if let Err(e) = self.persist(&record) {
                    tracing::warn!("could not write migrated record: {e}");
                }
                (Some(record), LoadSource::Migrated)
            }
            Loaded::Missing => (None, LoadSource::Missing),
            Loaded::Malformed(e) => {
                tracing::warn!("{e}; resetting to trial");
                let record = self.fresh_trial();
                match self.persist(&record) {
                    Ok(()) => (Some(record), LoadSource::ResetToTrial),
                    Err(e) => {
                        tracing::warn!("could not write trial record: {e}");
                        (None, LoadSource::Missing)
                    }
                }
            }
        };
        self.current = current;
        self.source = source;
        Ok(source)
    }

    pub fn current(&self) -> Option<&LicenseRecord> {
        self.current.as_ref()
    }

    pub fn load_source(&self) -> LoadSource {
        self.source
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn config(&self) -> &LicenseConfig {
        &self.config
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Validate without touching storage.
    pub fn verdict(&self) -> Verdict {
        self.validator.validate(self.current.as_ref(), self.clock.now())
    }

    /// Validate, marking the stored record expired when its time is up.
    pub fn validate(&mut self) -> Verdict {
        let verdict = self.verdict();
        if verdict.reason() == Some(Invalid::Expired) {
            if let Some(record) = &self.current {
                if record.status != LicenseStatus::Expired {
                    let mut expired = record.clone();
                    expired.status = LicenseStatus::Expired;
                    match self.persist(&expired) {
                        Ok(()) => self.current = Some(expired),
                        Err(e) => tracing::warn!("could not mark license expired: {e}"),
                    }
                }
            }
        }
        verdict
    }

    /// Activate a license key typed by the user.
    ///
    /// Bad format and unknown keys are rejected before storage is touched.
    pub fn activate(&mut self, input: &str) -> Result<Activation> {
        let key = keys::normalize(input);
        self.validator.format().check(&key)?;
        let grant = self
            .validator
            .table()
            .lookup(&key)
            .ok_or_else(|| LicenseError::UnknownKey(key.clone()))?;

        let record = LicenseRecord::activated(
            grant.key,
            grant.tier,
            grant.expiry_days,
            &self.device_id,
            self.clock.now(),
        );
        self.persist(&record)?;

        tracing::info!(package = %grant.tier.as_str(), expiry = %record.expiry, "license activated");
        let activation = Activation {
            package: grant.tier,
            expiry: record.expiry,
            days: grant.expiry_days,
        };
        self.current = Some(record);
        self.source = LoadSource::Current;
        Ok(activation)
    }

    /// Start a time-boxed demo of the trial package.
    pub fn start_demo(&mut self) -> Result<&LicenseRecord> {
        let record = LicenseRecord::demo(
            self.config.general.demo_minutes,
            &self.device_id,
            self.clock.now(),
        );
        self.persist(&record)?;
        tracing::info!(expiry = %record.expiry, "demo mode started");
        self.source = LoadSource::Current;
        Ok(self.current.insert(record))
    }

    /// Remove the license entirely.
    pub fn deactivate(&mut self) -> Result<()> {
        store::clear_record(&self.store)?;
        self.current = None;
        self.source = LoadSource::Missing;
        tracing::info!("license deactivated");
        Ok(())
    }

    /// Replace the license with an unactivated trial record.
    pub fn reset_to_trial(&mut self) -> Result<&LicenseRecord> {
        let record = self.fresh_trial();
        self.persist(&record)?;
        self.source = LoadSource::ResetToTrial;
        Ok(self.current.insert(record))
    }

    /// Features of the current tier; `None` without a license.
    pub fn features(&self) -> Option<FeatureBundle> {
        self.current.as_ref().map(|r| packages::features(r.package))
    }

    pub fn summary(&self) -> Option<LicenseSummary> {
        let record = self.current.as_ref()?;
        let now = self.clock.now();
        let days_left = record.days_left(now);
        let label = if days_left > EXPIRING_SOON_DAYS {
            StatusLabel::Active
        } else if days_left > 0 {
            StatusLabel::ExpiringSoon
        } else {
            StatusLabel::Expired
        };

        Some(LicenseSummary {
            package: record.package,
            package_name: record.package.package().display_name,
            status: record.status,
            label,
            start_date: record.start_date,
            expiry: record.expiry,
            days_left,
            verdict: self.validator.validate(Some(record), now),
        })
    }

    pub fn eligibility(&self) -> Result<Eligibility> {
        let record = self.current.as_ref().ok_or(LicenseError::NoLicense)?;
        upgrade::eligibility(record, self.clock.now())
    }

    pub fn upgrade_price(&self, target: Tier) -> u64 {
        upgrade::upgrade_price(self.current.as_ref(), target, self.clock.now())
    }

    /// Record a pending upgrade and build the WhatsApp link for it.
    pub fn request_upgrade(&mut self, target: Tier) -> Result<UpgradeOffer> {
        let request = upgrade::new_request(
            self.current.as_ref(),
            target,
            &self.device_id,
            self.clock.now(),
        )?;
        upgrade::append_request(&self.store, &request)?;

        let reason = match request.from_package {
            Some(from) => ContactReason::Upgrade {
                from,
                to: target,
                price: request.price,
            },
            None => ContactReason::Purchase,
        };
        tracing::info!(to = %target.as_str(), price = request.price, "upgrade requested");
        Ok(UpgradeOffer {
            link: self.contact_link(&reason),
            request,
        })
    }

    pub fn upgrade_requests(&self) -> Result<Vec<UpgradeRequest>> {
        upgrade::load_requests(&self.store)
    }

    pub fn contact_link(&self, reason: &ContactReason) -> String {
        contact::link_for(&self.config.contact.whatsapp_number, reason, &self.device_id)
    }

    /// Whether Maghrib and Isya are still shown for the current tier.
    ///
    /// The first call records the first-open time; later calls measure from it.
    pub fn maghrib_isya_visible(&self) -> Result<bool> {
        let Some(features) = self.features() else {
            return Ok(true);
        };
        if features.maghrib_isya_active_minutes == 0 {
            return Ok(true);
        }

        let now = self.clock.now();
        let first_open = self.first_open_time(now)?;
        Ok(restrictions::maghrib_isya_visible(
            first_open,
            now,
            features.maghrib_isya_active_minutes,
        ))
    }

    /// Build the ad scheduler for the current tier.
    ///
    /// `None` when there is no license, the license has expired, or the tier has no ads.
    pub fn ad_schedule(&self) -> Option<(AdScheduler, Schedule)> {
        let record = self.current.as_ref()?;
        if self.verdict().reason() == Some(Invalid::Expired) {
            return None;
        }
        let policy = packages::features(record.package).ads;
        let schedule = Schedule::from_policy(&policy, self.config.ads.first_delay())?;
        Some((
            AdScheduler::new(policy, self.config.ads.images.clone()),
            schedule,
        ))
    }

    fn first_open_time(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        let stored = self
            .store
            .get(FIRST_OPEN_KEY)?
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(DateTime::<Utc>::from_timestamp_millis);
        if let Some(at) = stored {
            return Ok(at);
        }
        self.store
            .set(FIRST_OPEN_KEY, &now.timestamp_millis().to_string())?;
        Ok(now)
    }

    fn fresh_trial(&self) -> LicenseRecord {
        LicenseRecord::fresh_trial(
            self.config.general.trial_days,
            &self.device_id,
            self.clock.now(),
        )
    }

    fn persist(&self, record: &LicenseRecord) -> Result<()> {
        store::save_record(&self.store, record, self.config.storage.mirror_legacy)
    }
}
