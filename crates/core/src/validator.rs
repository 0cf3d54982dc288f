//! License validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! record present → key format → key in allow-list → not past expiry.
//! Demo records skip the two key checks and are judged on expiry alone.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::keys::{KeyFormat, KeyTable};
use crate::record::LicenseRecord;

/// Why a license failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Invalid {
    Missing,
    BadFormat,
    UnknownKey,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "verdict")]
pub enum Verdict {
    Valid { days_left: i64 },
    Invalid { reason: Invalid },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }

    pub fn reason(&self) -> Option<Invalid> {
        match self {
            Verdict::Valid { .. } => None,
            Verdict::Invalid { reason } => Some(*reason),
        }
    }

    fn invalid(reason: Invalid) -> Self {
        Verdict::Invalid { reason }
    }
}

/// Stateless validator over a key format and allow-list.
#[derive(Debug, Clone)]
pub struct Validator {
    format: KeyFormat,
    table: KeyTable,
}

impl Validator {
    pub fn new(format: KeyFormat, table: KeyTable) -> Self {
        Self { format, table }
    }

    pub fn format(&self) -> &KeyFormat {
        &self.format
    }

    pub fn table(&self) -> &KeyTable {
        &self.table
    }

    pub fn validate(&self, record: Option<&LicenseRecord>, now: DateTime<Utc>) -> Verdict {
        let Some(record) = record else {
            return Verdict::invalid(Invalid::Missing);
        };

        if !record.is_demo() {
            if !self.format.is_valid(&record.key) {
                tracing::debug!(key = %record.key, "stored key fails format check");
                return Verdict::invalid(Invalid::BadFormat);
            }
            if !self.table.contains(&record.key) {
                tracing::debug!(key = %record.key, "stored key not in allow-list");
                return Verdict::invalid(Invalid::UnknownKey);
            }
        }

        if record.is_expired_at(now) {
            tracing::debug!(expiry = %record.expiry, "license expired");
            return Verdict::invalid(Invalid::Expired);
        }

        Verdict::Valid {
            days_left: record.days_left(now),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(KeyFormat::default(), KeyTable::builtin())
    }
}
