//! Terminal output formatting

use adzan_license_core::contact::format_rupiah;
use adzan_license_core::packages::{AdPolicy, FeatureBundle, OverlayBehavior, PackageDefinition};
use adzan_license_core::{Invalid, LicenseSummary, StatusLabel, Verdict};
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Durations this long are shown as lifetime licenses.
const LIFETIME_DAYS: i64 = 9999;

pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M UTC").to_string()
}

pub fn format_duration_days(days: i64) -> String {
    if days >= LIFETIME_DAYS {
        "Selamanya".to_string()
    } else {
        format!("{days} hari")
    }
}

pub fn label_badge(label: StatusLabel) -> String {
    match label {
        StatusLabel::Active => "Aktif".green().bold().to_string(),
        StatusLabel::ExpiringSoon => "Hampir Habis".yellow().bold().to_string(),
        StatusLabel::Expired => "Kadaluarsa".red().bold().to_string(),
    }
}

/// One-line explanation of why a license is not usable.
pub fn describe_invalid(reason: Invalid) -> &'static str {
    match reason {
        Invalid::Missing => "No license is stored on this device.",
        Invalid::BadFormat => "The stored license has no valid key and needs activation.",
        Invalid::UnknownKey => "The stored license key is not recognised.",
        Invalid::Expired => "The license period has ended.",
    }
}

pub fn print_summary(summary: &LicenseSummary) {
    eprintln!("  {}: {}", "Package".bold(), summary.package_name.cyan());
    eprintln!("  {}: {}", "Status".bold(), label_badge(summary.label));
    eprintln!("  {}: {}", "Started".bold(), format_date(summary.start_date));
    eprintln!("  {}: {}", "Expires".bold(), format_date(summary.expiry));
    if summary.days_left > 0 {
        eprintln!("  {}: {}", "Days left".bold(), summary.days_left);
    }
    if let Verdict::Invalid { reason } = summary.verdict {
        eprintln!("  {} {}", "\u{26a1}".yellow(), describe_invalid(reason));
    }
    eprintln!();
}

fn yes_no(hidden: bool) -> String {
    if hidden {
        "hidden".red().to_string()
    } else {
        "shown".green().to_string()
    }
}

fn list<T: serde::Serialize>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".dimmed().to_string();
    }
    items
        .iter()
        .filter_map(|i| serde_json::to_value(i).ok())
        .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_ads(ads: &AdPolicy) -> String {
    match ads {
        AdPolicy::Disabled => "none".green().to_string(),
        AdPolicy::Enabled {
            duration_secs,
            interval_minutes,
            overlay,
        } => {
            let placement = match overlay {
                OverlayBehavior::Behind => "behind overlays",
                OverlayBehavior::Front => "over overlays",
            };
            format!("{duration_secs}s every {interval_minutes} min, {placement}")
                .yellow()
                .to_string()
        }
    }
}

pub fn print_features(name: &str, features: &FeatureBundle) {
    eprintln!("  {}", format!("Features: {name}").bold());
    eprintln!("    Logo            {}", yes_no(features.hidden_logo));
    eprintln!("    Hidden slides   {}", list(&features.hidden_slides));
    eprintln!("    Power button    {}", yes_no(features.hidden_power_button));
    eprintln!("    Village name    {}", yes_no(features.hidden_village_name));
    eprintln!("    Imsak/Syuruq    {}", yes_no(features.hidden_imsak_syuruq));
    eprintln!("    Max images      {}", features.max_images);
    if features.maghrib_isya_active_minutes > 0 {
        eprintln!(
            "    Maghrib/Isya    first {} min only",
            features.maghrib_isya_active_minutes
        );
    }
    eprintln!("    Settings hidden {}", list(&features.hidden_settings_buttons));
    eprintln!("    Adzan hidden    {}", list(&features.hidden_adzan_buttons));
    eprintln!("    Audio disabled  {}", list(&features.hidden_audio));
    eprintln!("    Ads             {}", format_ads(&features.ads));
    eprintln!();
}

pub fn format_package_row(pkg: &PackageDefinition, current: bool) -> String {
    let marker = if current { "\u{25b8}" } else { " " };
    format!(
        "  {} {:<10} {:>14}  {:<10} {}",
        marker,
        pkg.display_name,
        format_rupiah(pkg.price),
        format_duration_days(pkg.duration_days),
        format_ads(&pkg.features.ads),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use adzan_license_core::packages::SettingsButton;

    #[test]
    fn lifetime_duration() {
        assert_eq!(format_duration_days(99_999), "Selamanya");
        assert_eq!(format_duration_days(365), "365 hari");
    }

    #[test]
    fn lists_use_serialized_names() {
        colored::control::set_override(false);
        assert_eq!(
            list(&[SettingsButton::DataMasjid, SettingsButton::SliderDuration]),
            "data-masjid, slider-duration"
        );
        assert_eq!(list(&[2u8, 4]), "2, 4");
    }
}
