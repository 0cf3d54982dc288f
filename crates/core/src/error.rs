//! Error taxonomy for the license core

use crate::packages::Tier;

#[derive(Debug, thiserror::Error)]
pub enum LicenseError {
    #[error("Invalid license key format '{input}'. Expected {prefix}-XXXXXX")]
    BadFormat { input: String, prefix: String },

    #[error("License key '{0}' was not found or has already been used")]
    UnknownKey(String),

    #[error("License has expired")]
    Expired,

    #[error("Stored license data is malformed: {0}")]
    MalformedStoredData(#[from] serde_json::Error),

    #[error("Failed to write '{key}' to license storage: {source}")]
    StorageWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{key}' from license storage: {source}")]
    StorageRead {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configured key prefix '{prefix}' does not match the built-in license keys")]
    PrefixMismatch { prefix: String },

    #[error("No license is active")]
    NoLicense,

    #[error("Unknown package tier '{0}'")]
    UnknownTier(String),

    #[error("{to} is not an upgrade from {from}")]
    NotAnUpgrade { from: Tier, to: Tier },

    #[error("Already on the highest package ({0})")]
    AlreadyTopTier(Tier),
}

pub type Result<T> = std::result::Result<T, LicenseError>;
