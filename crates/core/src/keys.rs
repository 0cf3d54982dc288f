//! License key format and the compiled-in allow-list

use regex::Regex;

use crate::error::{LicenseError, Result};
use crate::packages::Tier;

pub const DEFAULT_KEY_PREFIX: &str = "RH-MTV";

/// Key written into demo records. Never part of the allow-list.
pub const DEMO_KEY: &str = "DEMO-MODE";

/// One row of the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGrant {
    pub key: &'static str,
    pub tier: Tier,
    pub expiry_days: i64,
}

const GRANTS: &[KeyGrant] = &[
    KeyGrant { key: "RH-MTV-1Q2W3E", tier: Tier::Trial, expiry_days: 2 },
    KeyGrant { key: "RH-MTV-4R5T6Y", tier: Tier::Basic, expiry_days: 365 },
    KeyGrant { key: "RH-MTV-7U8I9O", tier: Tier::Premium, expiry_days: 365 },
    KeyGrant { key: "RH-MTV-0PASD1", tier: Tier::Vip, expiry_days: 9999 },
    KeyGrant { key: "RH-MTV-VIP001", tier: Tier::Vip, expiry_days: 9999 },
    KeyGrant { key: "RH-MTV-BAS001", tier: Tier::Basic, expiry_days: 365 },
    KeyGrant { key: "RH-MTV-PRE001", tier: Tier::Premium, expiry_days: 365 },
];

/// Validates key shape: `<PREFIX>-` followed by six uppercase alphanumerics.
#[derive(Debug, Clone)]
pub struct KeyFormat {
    prefix: String,
    pattern: Regex,
}

impl KeyFormat {
    pub fn new(prefix: &str) -> Self {
        let pattern = Regex::new(&format!("^{}-[A-Z0-9]{{6}}$", regex::escape(prefix)))
            .expect("escaped prefix always forms a valid pattern");
        Self {
            prefix: prefix.to_string(),
            pattern,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.pattern.is_match(key)
    }

    /// Returns `Err(BadFormat)` when the key does not match.
    pub fn check(&self, key: &str) -> Result<()> {
        if self.is_valid(key) {
            Ok(())
        } else {
            Err(LicenseError::BadFormat {
                input: key.to_string(),
                prefix: self.prefix.clone(),
            })
        }
    }
}

impl Default for KeyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}

/// Lookup over the static allow-list.
#[derive(Debug, Clone, Copy)]
pub struct KeyTable {
    grants: &'static [KeyGrant],
}

impl KeyTable {
    /// The table shipped with the application.
    pub fn builtin() -> Self {
        Self { grants: GRANTS }
    }

    pub fn lookup(&self, key: &str) -> Option<&'static KeyGrant> {
        self.grants.iter().find(|g| g.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static KeyGrant> {
        self.grants.iter()
    }
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Normalizes user input the way the activation field does: trimmed and uppercased.
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}
