//! Tests for license validation order and expiry handling

use adzan_license_core::keys::{self, KeyFormat, KeyTable};
use adzan_license_core::{Invalid, LicenseRecord, LicenseStatus, Tier, Validator, Verdict};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
}

fn record(key: &str, tier: Tier, days: i64) -> LicenseRecord {
    LicenseRecord::activated(key, tier, days, "DEV-TEST-ABC123", t0())
}

#[test]
fn missing_record_is_invalid() {
    let v = Validator::default();
    assert_eq!(v.validate(None, t0()), Verdict::Invalid { reason: Invalid::Missing });
}

#[test]
fn malformed_key_fails_format_before_lookup() {
    assert!(!KeyFormat::default().is_valid("ABC-123"));
    let v = Validator::default();
    let rec = record("ABC-123", Tier::Trial, 2);
    assert_eq!(v.validate(Some(&rec), t0()).reason(), Some(Invalid::BadFormat));
}

#[test]
fn well_formed_unknown_key_fails_lookup() {
    let v = Validator::default();
    let rec = record("RH-MTV-ZZZZZZ", Tier::Basic, 365);
    assert_eq!(v.validate(Some(&rec), t0()).reason(), Some(Invalid::UnknownKey));
}

#[test]
fn lowercase_key_is_bad_format() {
    let v = Validator::default();
    let rec = record("rh-mtv-1q2w3e", Tier::Trial, 2);
    assert_eq!(v.validate(Some(&rec), t0()).reason(), Some(Invalid::BadFormat));
    assert_eq!(keys::normalize("  rh-mtv-1q2w3e "), "RH-MTV-1Q2W3E");
}

#[test]
fn expired_record_is_invalid_for_every_tier() {
    let v = Validator::default();
    let table = KeyTable::builtin();
    for tier in Tier::ALL {
        let grant = table.iter().find(|g| g.tier == tier).unwrap();
        let rec = record(grant.key, tier, grant.expiry_days);
        let after = rec.expiry + Duration::seconds(1);
        assert_eq!(
            v.validate(Some(&rec), after).reason(),
            Some(Invalid::Expired),
            "{tier:?} should expire"
        );
    }
}

#[test]
fn valid_up_to_and_including_expiry_instant() {
    let v = Validator::default();
    let rec = record("RH-MTV-1Q2W3E", Tier::Trial, 2);
    assert_eq!(v.validate(Some(&rec), t0()), Verdict::Valid { days_left: 2 });
    assert!(v.validate(Some(&rec), rec.expiry).is_valid());
    assert!(!v.validate(Some(&rec), rec.expiry + Duration::milliseconds(1)).is_valid());
}

#[test]
fn far_future_expiry_compares_against_real_dates() {
    let v = Validator::default();
    let now = Utc::now();
    let rec = LicenseRecord::activated("RH-MTV-0PASD1", Tier::Vip, 99_999, "DEV", now);
    assert_eq!(rec.expiry, now + Duration::days(99_999));
    assert!(rec.expiry.format("%Y").to_string().parse::<i32>().unwrap() > 2250);

    assert!(v.validate(Some(&rec), now).is_valid());
    assert!(v.validate(Some(&rec), now + Duration::days(99_998)).is_valid());
    assert_eq!(
        v.validate(Some(&rec), now + Duration::days(100_000)).reason(),
        Some(Invalid::Expired)
    );
}

#[test]
fn demo_records_skip_key_checks() {
    let v = Validator::default();
    let demo = LicenseRecord::demo(15, "DEV", t0());
    assert!(v.validate(Some(&demo), t0()).is_valid());
    assert!(v.validate(Some(&demo), t0() + Duration::minutes(15)).is_valid());
    assert_eq!(
        v.validate(Some(&demo), t0() + Duration::minutes(15) + Duration::seconds(1))
            .reason(),
        Some(Invalid::Expired)
    );

    let mut marked = demo.clone();
    marked.status = LicenseStatus::Expired;
    assert_eq!(
        v.validate(Some(&marked), t0() + Duration::hours(1)).reason(),
        Some(Invalid::Expired)
    );
}

#[test]
fn demo_key_on_a_paid_tier_is_not_a_demo() {
    let v = Validator::default();
    let mut forged = LicenseRecord::demo(15, "DEV", t0());
    forged.package = Tier::Vip;
    forged.expiry = t0() + Duration::days(9999);
    assert!(!forged.is_demo());
    assert_eq!(v.validate(Some(&forged), t0()).reason(), Some(Invalid::BadFormat));
}

#[test]
fn custom_prefix() {
    let v = Validator::new(KeyFormat::new("XY-Z"), KeyTable::builtin());
    let rec = record("RH-MTV-1Q2W3E", Tier::Trial, 2);
    assert_eq!(v.validate(Some(&rec), t0()).reason(), Some(Invalid::BadFormat));
    assert_eq!(v.format().prefix(), "XY-Z");
}

#[test]
fn builtin_table_contents() {
    let table = KeyTable::builtin();
    assert_eq!(table.len(), 7);
    let grant = table.lookup("RH-MTV-1Q2W3E").unwrap();
    assert_eq!((grant.tier, grant.expiry_days), (Tier::Trial, 2));
    let grant = table.lookup("RH-MTV-VIP001").unwrap();
    assert_eq!((grant.tier, grant.expiry_days), (Tier::Vip, 9999));
    assert!(table.lookup("RH-MTV-000000").is_none());
}
