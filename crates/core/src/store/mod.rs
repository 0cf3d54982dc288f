//! Key-value storage for license state
//!
//! Mirrors the browser's local storage: string keys, string (JSON) values.
//! Two backends:
//! - `MemoryStore`: in-process map (tests, embedding)
//! - `FileStore`: one file per key under a directory

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::{LicenseError, Result};
use crate::record::{LegacyRecord, LicenseRecord};

/// Canonical license record.
pub const RECORD_KEY: &str = "adzan_offline_license";
/// Legacy license record, read for migration and optionally mirrored.
pub const LEGACY_RECORD_KEY: &str = "adzanAppLicense";
pub const DEVICE_ID_KEY: &str = "adzan_device_id";
pub const FIRST_OPEN_KEY: &str = "firstOpenTime";
pub const UPGRADE_REQUESTS_KEY: &str = "upgrade_requests";

/// Abstract string key-value backend.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Outcome of reading the stored license.
#[derive(Debug)]
pub enum Loaded {
    /// Canonical record found.
    Current(LicenseRecord),
    /// Only the legacy shape was present; converted but not yet written back.
    Migrated(LicenseRecord),
    Missing,
    /// Stored JSON could not be parsed.
    Malformed(LicenseError),
}

/// Read the license record.
///
/// The canonical key wins whenever it exists, even if malformed; the legacy key
/// is consulted only when the canonical one is absent.
pub fn load_record(store: &dyn KeyValueStore, device_id: &str) -> Result<Loaded> {
    if let Some(raw) = store.get(RECORD_KEY)? {
        return Ok(match serde_json::from_str::<LicenseRecord>(&raw) {
            Ok(record) => Loaded::Current(record),
            Err(e) => Loaded::Malformed(e.into()),
        });
    }

    if let Some(raw) = store.get(LEGACY_RECORD_KEY)? {
        return Ok(match serde_json::from_str::<LegacyRecord>(&raw) {
            Ok(legacy) => Loaded::Migrated(LicenseRecord::from_legacy(legacy, device_id)),
            Err(e) => Loaded::Malformed(e.into()),
        });
    }

    Ok(Loaded::Missing)
}

/// Write the record, and the legacy projection when `mirror_legacy` is set.
///
/// The canonical write is the commit point. A failed mirror write is logged
/// and does not fail the save.
pub fn save_record(
    store: &dyn KeyValueStore,
    record: &LicenseRecord,
    mirror_legacy: bool,
) -> Result<()> {
    let json = serde_json::to_string(record)?;
    let legacy = if mirror_legacy {
        Some(serde_json::to_string(&record.to_legacy())?)
    } else {
        None
    };
    store.set(RECORD_KEY, &json)?;

    if let Some(legacy) = legacy {
        if let Err(e) = store.set(LEGACY_RECORD_KEY, &legacy) {
            tracing::warn!("could not mirror legacy license record: {e}");
        }
    }
    Ok(())
}

/// Delete both record shapes.
///
/// The legacy record goes first so a partial failure never leaves it behind
/// without the canonical one.
pub fn clear_record(store: &dyn KeyValueStore) -> Result<()> {
    store.remove(LEGACY_RECORD_KEY)?;
    store.remove(RECORD_KEY)?;
    Ok(())
}
