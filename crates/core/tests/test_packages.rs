//! Tests for package definitions and the feature resolver

use adzan_license_core::packages::{
    self, AdPolicy, AdzanButton, AudioCue, OverlayBehavior, SettingsButton,
};
use adzan_license_core::{features, package, LicenseError, Tier};

#[test]
fn resolver_is_total_and_deterministic() {
    for tier in Tier::ALL {
        assert_eq!(features(tier), features(tier), "{tier:?} not deterministic");
        assert_eq!(package(tier).features, features(tier));
        assert_eq!(package(tier).tier, tier);
    }
}

#[test]
fn trial_is_most_restricted() {
    let f = features(Tier::Trial);
    assert!(f.hidden_logo);
    assert_eq!(f.hidden_slides, vec![2, 3, 4]);
    assert!(f.hidden_power_button);
    assert!(f.hidden_village_name);
    assert_eq!(f.max_images, 2);
    assert!(f.hidden_imsak_syuruq);
    assert_eq!(f.maghrib_isya_active_minutes, 15);
    assert_eq!(
        f.hidden_settings_buttons,
        vec![
            SettingsButton::DataMasjid,
            SettingsButton::RunningText,
            SettingsButton::SliderDuration
        ]
    );
    assert_eq!(
        f.hidden_adzan_buttons,
        vec![
            AdzanButton::CountdownAdzan,
            AdzanButton::CountdownIqamah,
            AdzanButton::OverlayDuration
        ]
    );
    assert_eq!(f.hidden_audio, vec![AudioCue::Shalawat, AudioCue::Adzan]);
    assert_eq!(
        f.ads,
        AdPolicy::Enabled {
            duration_secs: 15,
            interval_minutes: 10,
            overlay: OverlayBehavior::Behind
        }
    );
}

#[test]
fn basic_has_lighter_restrictions() {
    let f = features(Tier::Basic);
    assert!(f.hidden_logo);
    assert_eq!(f.hidden_slides, vec![2, 4]);
    assert_eq!(f.max_images, 2);
    assert_eq!(f.hidden_settings_buttons, vec![SettingsButton::SliderDuration]);
    assert_eq!(f.hidden_adzan_buttons, vec![AdzanButton::OverlayDuration]);
    assert_eq!(
        f.ads,
        AdPolicy::Enabled {
            duration_secs: 5,
            interval_minutes: 300,
            overlay: OverlayBehavior::Behind
        }
    );
}

#[test]
fn paid_tiers_have_no_restrictions_or_ads() {
    for (tier, max_images) in [(Tier::Premium, 5), (Tier::Vip, 7)] {
        let f = features(tier);
        assert!(!f.hidden_logo);
        assert!(f.hidden_slides.is_empty());
        assert!(f.hidden_settings_buttons.is_empty());
        assert!(f.hidden_adzan_buttons.is_empty());
        assert!(f.hidden_audio.is_empty());
        assert_eq!(f.max_images, max_images);
        assert_eq!(f.ads, AdPolicy::Disabled);
        assert!(!f.ads.is_enabled());
    }
}

#[test]
fn catalog_prices_and_durations() {
    let catalog = packages::catalog();
    let rows: Vec<(Tier, &str, u64, i64)> = catalog
        .iter()
        .map(|p| (p.tier, p.display_name, p.price, p.duration_days))
        .collect();
    assert_eq!(
        rows,
        vec![
            (Tier::Trial, "Uji Coba", 50_000, 2),
            (Tier::Basic, "Dasar", 340_000, 365),
            (Tier::Premium, "Premium", 570_000, 365),
            (Tier::Vip, "VIP", 1_420_000, 99_999),
        ]
    );
}

#[test]
fn tier_parsing() {
    assert_eq!("trial".parse::<Tier>().unwrap(), Tier::Trial);
    assert_eq!(" VIP ".parse::<Tier>().unwrap(), Tier::Vip);
    assert!(matches!(
        "gold".parse::<Tier>(),
        Err(LicenseError::UnknownTier(name)) if name == "gold"
    ));
}

#[test]
fn unknown_tier_name_applies_no_features() {
    assert!(packages::resolve_named("platinum").is_none());
    assert_eq!(packages::resolve_named("premium"), Some(features(Tier::Premium)));
}

#[test]
fn tier_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Tier::Basic).unwrap(), "\"basic\"");
    let back: Tier = serde_json::from_str("\"vip\"").unwrap();
    assert_eq!(back, Tier::Vip);
    assert!(serde_json::from_str::<Tier>("\"gold\"").is_err());
}

#[test]
fn feature_lists_serialize_with_page_names() {
    let json = serde_json::to_value(features(Tier::Trial)).unwrap();
    assert_eq!(json["hiddenSettingsButtons"][0], "data-masjid");
    assert_eq!(json["hiddenAdzanButtons"][1], "countdown-iqamah");
    assert_eq!(json["hiddenAudio"][0], "shalawat");
    assert_eq!(json["ads"]["mode"], "enabled");
}
