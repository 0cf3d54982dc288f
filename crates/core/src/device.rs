//! Locally generated device identifier, shown to support staff

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::store::{KeyValueStore, DEVICE_ID_KEY};

/// Returns the stored device ID, generating and persisting one on first use.
pub fn load_or_create(store: &dyn KeyValueStore, now: DateTime<Utc>) -> Result<String> {
    if let Some(id) = store.get(DEVICE_ID_KEY)? {
        let id = id.trim().to_string();
        if !id.is_empty() {
            return Ok(id);
        }
    }

    let id = generate(now);
    store.set(DEVICE_ID_KEY, &id)?;
    tracing::info!(device_id = %id, "generated device id");
    Ok(id)
}

/// `DEV-<millis in base36>-<6 random chars>`, uppercase.
pub fn generate(now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("DEV-{}-{}", to_base36(millis), &random[..6]).to_uppercase()
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    #[test]
    fn base36_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn generated_id_shape() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let id = generate(now);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3, "unexpected id: {id}");
        assert_eq!(parts[0], "DEV");
        assert_eq!(parts[1], "LOYW3V28");
        assert_eq!(parts[2].len(), 6);
        assert_eq!(id, id.to_uppercase());
    }

    #[test]
    fn id_is_stable_once_stored() {
        let store = MemoryStore::new();
        let now = Utc::now();
        let first = load_or_create(&store, now).unwrap();
        let second = load_or_create(&store, now).unwrap();
        assert_eq!(first, second);
    }
}
