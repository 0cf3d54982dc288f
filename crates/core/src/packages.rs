//! Package tiers and the feature bundle each one unlocks
//!
//! The table is compiled in. Every lookup is an exhaustive `match` over [`Tier`],
//! so adding a tier without a bundle is a compile error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LicenseError;

/// License tier, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Trial,
    Basic,
    Premium,
    Vip,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Trial, Tier::Basic, Tier::Premium, Tier::Vip];

    /// Lowercase identifier as persisted.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Trial => "trial",
            Tier::Basic => "basic",
            Tier::Premium => "premium",
            Tier::Vip => "vip",
        }
    }

    /// The next tier up, if any.
    pub fn next(self) -> Option<Tier> {
        match self {
            Tier::Trial => Some(Tier::Basic),
            Tier::Basic => Some(Tier::Premium),
            Tier::Premium => Some(Tier::Vip),
            Tier::Vip => None,
        }
    }

    pub fn package(self) -> PackageDefinition {
        package(self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(package(*self).display_name)
    }
}

impl FromStr for Tier {
    type Err = LicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trial" => Ok(Tier::Trial),
            "basic" => Ok(Tier::Basic),
            "premium" => Ok(Tier::Premium),
            "vip" => Ok(Tier::Vip),
            _ => Err(LicenseError::UnknownTier(s.to_string())),
        }
    }
}

/// Static description of a purchasable package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDefinition {
    pub tier: Tier,
    pub display_name: &'static str,
    /// Price in rupiah
    pub price: u64,
    pub duration_days: i64,
    pub features: FeatureBundle,
}

/// Settings-panel buttons a tier can hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingsButton {
    DataMasjid,
    RunningText,
    SliderDuration,
}

/// Buttons in the prayer-time settings modal a tier can hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdzanButton {
    CountdownAdzan,
    CountdownIqamah,
    OverlayDuration,
}

/// Audio cues a tier can disable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCue {
    Shalawat,
    Adzan,
}

/// Whether an ad may be drawn over a full-screen overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayBehavior {
    /// Stay behind: skip the ad while an overlay is visible.
    Behind,
    /// Draw on top of any overlay.
    Front,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum AdPolicy {
    Disabled,
    Enabled {
        /// Seconds an ad stays on screen
        duration_secs: u64,
        /// Minutes between ads
        interval_minutes: u64,
        overlay: OverlayBehavior,
    },
}

impl AdPolicy {
    pub fn is_enabled(&self) -> bool {
        matches!(self, AdPolicy::Enabled { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureBundle {
    pub hidden_logo: bool,
    pub hidden_slides: Vec<u8>,
    pub hidden_power_button: bool,
    pub hidden_village_name: bool,
    pub max_images: usize,
    pub hidden_imsak_syuruq: bool,
    /// Minutes after first open during which Maghrib and Isya stay visible. 0 = always.
    pub maghrib_isya_active_minutes: u32,
    pub hidden_settings_buttons: Vec<SettingsButton>,
    pub hidden_adzan_buttons: Vec<AdzanButton>,
    pub hidden_audio: Vec<AudioCue>,
    pub ads: AdPolicy,
}

impl FeatureBundle {
    fn unrestricted(max_images: usize) -> Self {
        Self {
            hidden_logo: false,
            hidden_slides: Vec::new(),
            hidden_power_button: false,
            hidden_village_name: false,
            max_images,
            hidden_imsak_syuruq: false,
            maghrib_isya_active_minutes: 0,
            hidden_settings_buttons: Vec::new(),
            hidden_adzan_buttons: Vec::new(),
            hidden_audio: Vec::new(),
            ads: AdPolicy::Disabled,
        }
    }
}

/// Returns the feature bundle for a tier.
pub fn features(tier: Tier) -> FeatureBundle {
    match tier {
        Tier::Trial => FeatureBundle {
            hidden_logo: true,
            hidden_slides: vec![2, 3, 4],
            hidden_power_button: true,
            hidden_village_name: true,
            max_images: 2,
            hidden_imsak_syuruq: true,
            maghrib_isya_active_minutes: 15,
            hidden_settings_buttons: vec![
                SettingsButton::DataMasjid,
                SettingsButton::RunningText,
                SettingsButton::SliderDuration,
            ],
            hidden_adzan_buttons: vec![
                AdzanButton::CountdownAdzan,
                AdzanButton::CountdownIqamah,
                AdzanButton::OverlayDuration,
            ],
            hidden_audio: vec![AudioCue::Shalawat, AudioCue::Adzan],
            ads: AdPolicy::Enabled {
                duration_secs: 15,
                interval_minutes: 10,
                overlay: OverlayBehavior::Behind,
            },
        },
        Tier::Basic => FeatureBundle {
            hidden_logo: true,
            hidden_slides: vec![2, 4],
            max_images: 2,
            hidden_settings_buttons: vec![SettingsButton::SliderDuration],
            hidden_adzan_buttons: vec![AdzanButton::OverlayDuration],
            hidden_audio: vec![AudioCue::Shalawat, AudioCue::Adzan],
            ads: AdPolicy::Enabled {
                duration_secs: 5,
                interval_minutes: 300,
                overlay: OverlayBehavior::Behind,
            },
            ..FeatureBundle::unrestricted(2)
        },
        Tier::Premium => FeatureBundle::unrestricted(5),
        Tier::Vip => FeatureBundle::unrestricted(7),
    }
}

/// Returns the package definition for a tier.
pub fn package(tier: Tier) -> PackageDefinition {
    let (display_name, price, duration_days) = match tier {
        Tier::Trial => ("Uji Coba", 50_000, 2),
        Tier::Basic => ("Dasar", 340_000, 365),
        Tier::Premium => ("Premium", 570_000, 365),
        Tier::Vip => ("VIP", 1_420_000, 99_999),
    };
    PackageDefinition {
        tier,
        display_name,
        price,
        duration_days,
        features: features(tier),
    }
}

/// Resolves a tier by name. Unknown names apply no features.
pub fn resolve_named(name: &str) -> Option<FeatureBundle> {
    match name.parse::<Tier>() {
        Ok(tier) => Some(features(tier)),
        Err(e) => {
            tracing::warn!(tier = name, "{e}; no features applied");
            None
        }
    }
}

/// All package definitions, lowest tier first.
pub fn catalog() -> Vec<PackageDefinition> {
    Tier::ALL.into_iter().map(package).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(Tier::Trial < Tier::Basic);
        assert!(Tier::Premium < Tier::Vip);
        assert_eq!(Tier::Vip.next(), None);
    }

    #[test]
    fn basic_keeps_power_button_and_village_name() {
        let f = features(Tier::Basic);
        assert!(!f.hidden_power_button);
        assert!(!f.hidden_village_name);
        assert!(!f.hidden_imsak_syuruq);
        assert_eq!(f.maghrib_isya_active_minutes, 0);
    }
}
