//! Upgrade eligibility, prorated pricing and pending upgrade requests
//!
//! No payment happens here. A request is recorded locally as pending and the
//! buyer is sent to WhatsApp; the seller replies with a new key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LicenseError, Result};
use crate::packages::Tier;
use crate::record::{ceil_days, LicenseRecord};
use crate::store::{KeyValueStore, UPGRADE_REQUESTS_KEY};

/// Below this many days left, an upgrade is recommended.
const RECOMMEND_BELOW_DAYS: i64 = 30;

/// Upgrade price never drops below this share of the target price.
const MIN_PRICE_RATIO: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    pub current: Tier,
    pub next: Tier,
    pub days_left: i64,
    pub recommendation: Option<String>,
}

/// Whether the current license can move up a tier.
pub fn eligibility(record: &LicenseRecord, now: DateTime<Utc>) -> Result<Eligibility> {
    let next = record
        .package
        .next()
        .ok_or(LicenseError::AlreadyTopTier(record.package))?;
    let days_left = record.days_left(now);
    let recommendation = (days_left < RECOMMEND_BELOW_DAYS).then(|| {
        format!("Masa aktif tersisa {days_left} hari. Disarankan untuk upgrade.")
    });

    Ok(Eligibility {
        current: record.package,
        next,
        days_left,
        recommendation,
    })
}

/// Price in rupiah for moving to `target`.
///
/// Full price from no license or from trial. Otherwise the unused share of the
/// current package is credited, down to a floor of half the target price.
pub fn upgrade_price(current: Option<&LicenseRecord>, target: Tier, now: DateTime<Utc>) -> u64 {
    let target_price = target.package().price as f64;
    let Some(record) = current else {
        return target_price.round() as u64;
    };
    if record.package == Tier::Trial {
        return target_price.round() as u64;
    }

    let current_price = record.package.package().price as f64;
    let total_days = record.total_days();
    let days_used = ceil_days(now - record.start_date);
    let remaining_value = if total_days > 0 {
        let unused = (total_days - days_used).max(0) as f64;
        current_price * unused / total_days as f64
    } else {
        0.0
    };

    let price = (target_price - remaining_value).max(target_price * MIN_PRICE_RATIO);
    price.round() as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
}

/// An upgrade the user asked for and has not yet paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRequest {
    pub device_id: String,
    pub from_package: Option<Tier>,
    pub to_package: Tier,
    pub price: u64,
    pub created_at: DateTime<Utc>,
    pub status: RequestStatus,
}

/// Build a pending request. The target must be strictly above the current tier.
pub fn new_request(
    current: Option<&LicenseRecord>,
    target: Tier,
    device_id: &str,
    now: DateTime<Utc>,
) -> Result<UpgradeRequest> {
    if let Some(record) = current {
        if record.package.next().is_none() {
            return Err(LicenseError::AlreadyTopTier(record.package));
        }
        if target <= record.package {
            return Err(LicenseError::NotAnUpgrade {
                from: record.package,
                to: target,
            });
        }
    }

    Ok(UpgradeRequest {
        device_id: device_id.to_string(),
        from_package: current.map(|r| r.package),
        to_package: target,
        price: upgrade_price(current, target, now),
        created_at: now,
        status: RequestStatus::Pending,
    })
}

/// All recorded requests, oldest first. A corrupt list reads as empty.
pub fn load_requests(store: &dyn KeyValueStore) -> Result<Vec<UpgradeRequest>> {
    let Some(raw) = store.get(UPGRADE_REQUESTS_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(list) => Ok(list),
        Err(e) => {
            tracing::warn!("discarding malformed upgrade request list: {e}");
            Ok(Vec::new())
        }
    }
}

pub fn append_request(store: &dyn KeyValueStore, request: &UpgradeRequest) -> Result<()> {
    let mut requests = load_requests(store)?;
    requests.push(request.clone());
    store.set(UPGRADE_REQUESTS_KEY, &serde_json::to_string(&requests)?)
}
