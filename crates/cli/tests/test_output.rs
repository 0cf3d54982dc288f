//! Tests for terminal formatting

use adzan_license_cli::output::terminal;
use adzan_license_core::{package, Invalid, StatusLabel, Tier};
use chrono::{TimeZone, Utc};

fn plain() {
    colored::control::set_override(false);
}

#[test]
fn dates_are_day_first() {
    let at = Utc.with_ymd_and_hms(2025, 2, 7, 9, 5, 0).unwrap();
    assert_eq!(terminal::format_date(at), "07/02/2025 09:05 UTC");
}

#[test]
fn badges() {
    plain();
    assert_eq!(terminal::label_badge(StatusLabel::Active), "Aktif");
    assert_eq!(terminal::label_badge(StatusLabel::ExpiringSoon), "Hampir Habis");
    assert_eq!(terminal::label_badge(StatusLabel::Expired), "Kadaluarsa");
}

#[test]
fn ads_description() {
    plain();
    assert_eq!(
        terminal::format_ads(&package(Tier::Trial).features.ads),
        "15s every 10 min, behind overlays"
    );
    assert_eq!(terminal::format_ads(&package(Tier::Vip).features.ads), "none");
}

#[test]
fn package_rows() {
    plain();
    let row = terminal::format_package_row(&package(Tier::Vip), true);
    assert!(row.contains("VIP"));
    assert!(row.contains("Rp 1.420.000"));
    assert!(row.contains("Selamanya"));
    assert!(row.contains('\u{25b8}'));

    let row = terminal::format_package_row(&package(Tier::Basic), false);
    assert!(row.contains("Rp 340.000"));
    assert!(row.contains("365 hari"));
    assert!(!row.contains('\u{25b8}'));
}

#[test]
fn every_invalid_reason_is_described() {
    for reason in [
        Invalid::Missing,
        Invalid::BadFormat,
        Invalid::UnknownKey,
        Invalid::Expired,
    ] {
        assert!(!terminal::describe_invalid(reason).is_empty());
    }
}
