//! Persisted license record and the legacy shape it replaces

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::keys::DEMO_KEY;
use crate::packages::Tier;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    Pending,
    Active,
    Expired,
    Demo,
}

/// The current license, as stored under [`crate::store::RECORD_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    pub key: String,
    pub package: Tier,
    pub start_date: DateTime<Utc>,
    /// Fixed at creation from `start_date`; never recomputed.
    pub expiry: DateTime<Utc>,
    #[serde(default)]
    pub device_id: String,
    pub status: LicenseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<DateTime<Utc>>,
}

impl LicenseRecord {
    /// Record for a freshly activated key.
    pub fn activated(
        key: &str,
        package: Tier,
        expiry_days: i64,
        device_id: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            key: key.to_string(),
            package,
            start_date: now,
            expiry: now + Duration::days(expiry_days),
            device_id: device_id.to_string(),
            status: LicenseStatus::Active,
            activated_at: Some(now),
        }
    }

    /// Time-boxed demo of the trial package.
    pub fn demo(minutes: i64, device_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            key: DEMO_KEY.to_string(),
            package: Tier::Trial,
            start_date: now,
            expiry: now + Duration::minutes(minutes),
            device_id: device_id.to_string(),
            status: LicenseStatus::Demo,
            activated_at: Some(now),
        }
    }

    /// Unactivated trial record used to recover from corrupt storage.
    pub fn fresh_trial(days: i64, device_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            key: String::new(),
            package: Tier::Trial,
            start_date: now,
            expiry: now + Duration::days(days),
            device_id: device_id.to_string(),
            status: LicenseStatus::Pending,
            activated_at: None,
        }
    }

    /// Demo records keep their key after being marked expired. Only the trial
    /// package can run as a demo.
    pub fn is_demo(&self) -> bool {
        self.key == DEMO_KEY && self.package == Tier::Trial
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry
    }

    /// Whole days remaining, rounded up. Zero or negative once expired.
    pub fn days_left(&self, now: DateTime<Utc>) -> i64 {
        ceil_days(self.expiry - now)
    }

    /// Length of the license period in whole days, rounded up.
    pub fn total_days(&self) -> i64 {
        ceil_days(self.expiry - self.start_date)
    }

    /// Build a canonical record from the legacy shape.
    ///
    /// Legacy records never carried a key, so the result still needs activation.
    pub fn from_legacy(legacy: LegacyRecord, device_id: &str) -> Self {
        let status = match legacy.payment_status {
            PaymentStatus::Paid => LicenseStatus::Active,
            PaymentStatus::Pending => LicenseStatus::Pending,
            PaymentStatus::Expired => LicenseStatus::Expired,
        };
        Self {
            key: String::new(),
            package: legacy.package,
            start_date: legacy.start_date,
            expiry: legacy.end_date,
            device_id: device_id.to_string(),
            status,
            activated_at: None,
        }
    }

    /// The legacy projection, written alongside for older page scripts.
    pub fn to_legacy(&self) -> LegacyRecord {
        LegacyRecord {
            package: self.package,
            start_date: self.start_date,
            end_date: self.expiry,
            payment_status: if self.status == LicenseStatus::Active {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Pending
            },
            payment_data: None,
        }
    }
}

pub(crate) fn ceil_days(span: Duration) -> i64 {
    let ms = span.num_milliseconds();
    if ms > 0 {
        (ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    } else {
        // truncation rounds toward zero, which is the ceiling for negatives
        ms / MILLIS_PER_DAY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Expired,
}

/// Older record shape stored under [`crate::store::LEGACY_RECORD_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRecord {
    pub package: Tier,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn days_left_rounds_up() {
        let rec = LicenseRecord::activated("RH-MTV-1Q2W3E", Tier::Trial, 2, "DEV", t0());
        assert_eq!(rec.days_left(t0()), 2);
        assert_eq!(rec.days_left(t0() + Duration::hours(1)), 2);
        assert_eq!(rec.days_left(t0() + Duration::hours(25)), 1);
        assert_eq!(rec.days_left(t0() + Duration::days(2)), 0);
        assert_eq!(rec.days_left(t0() + Duration::hours(60)), 0);
        assert_eq!(rec.days_left(t0() + Duration::days(4)), -2);
    }

    #[test]
    fn legacy_projection_maps_active_to_paid() {
        let rec = LicenseRecord::activated("RH-MTV-4R5T6Y", Tier::Basic, 365, "DEV", t0());
        let legacy = rec.to_legacy();
        assert_eq!(legacy.payment_status, PaymentStatus::Paid);
        assert_eq!(legacy.end_date, rec.expiry);

        let demo = LicenseRecord::demo(15, "DEV", t0());
        assert_eq!(demo.to_legacy().payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn camel_case_field_names() {
        let rec = LicenseRecord::demo(15, "DEV-X", t0());
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"deviceId\":\"DEV-X\""));
        assert!(json.contains("\"status\":\"demo\""));
        assert!(json.contains("\"package\":\"trial\""));
    }
}
