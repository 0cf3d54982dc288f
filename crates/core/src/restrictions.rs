//! Data-level restrictions derived from a feature bundle
//!
//! These act on application data handed over by the page (the uploaded image
//! list, the mosque address, the first-open timestamp). Hiding elements is left
//! to the page.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Truncate the uploaded image list to `max`. Returns true if anything was dropped.
pub fn limit_images(images: &mut Vec<String>, max: usize) -> bool {
    if images.len() > max {
        images.truncate(max);
        true
    } else {
        false
    }
}

fn village_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)Desa\s+\w+,?\s*").expect("static pattern"))
}

/// Remove the first `Desa <name>,` segment from an address.
///
/// Returns `fallback` when nothing is left.
pub fn strip_village_name(address: &str, fallback: &str) -> String {
    let stripped = village_pattern().replace(address, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        fallback.to_string()
    } else {
        stripped.to_string()
    }
}

/// Whether Maghrib and Isya times are still shown.
///
/// `active_minutes == 0` means no restriction.
pub fn maghrib_isya_visible(
    first_open: DateTime<Utc>,
    now: DateTime<Utc>,
    active_minutes: u32,
) -> bool {
    if active_minutes == 0 {
        return true;
    }
    let elapsed_ms = (now - first_open).num_milliseconds();
    elapsed_ms <= i64::from(active_minutes) * 60_000
}
