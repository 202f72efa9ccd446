//! Registry limits and allow-lists.

use serde::{Deserialize, Serialize};

/// Configurable limits enforced by registration and record updates.
///
/// The defaults are the production values; tests tighten individual fields
/// with struct-update syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Minimum accepted TTL in seconds.
    pub min_ttl_secs: u32,
    /// Shortest registration term in whole years.
    pub min_register_years: u32,
    /// Longest registration term in whole years.
    pub max_register_years: u32,
    /// Maximum record entries on one name.
    pub max_records: usize,
    /// Minimum record label length in bytes.
    pub min_label_bytes: usize,
    /// Maximum record label length in bytes.
    pub max_label_bytes: usize,
    /// Minimum record value length in bytes.
    pub min_value_bytes: usize,
    /// Maximum record value length in bytes.
    pub max_value_bytes: usize,
    /// Top-level domains a name may be registered under.
    pub valid_tlds: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            min_ttl_secs: 60 * 60,
            min_register_years: 1,
            max_register_years: 5,
            max_records: 50,
            min_label_bytes: 1,
            max_label_bytes: 64,
            min_value_bytes: 1,
            max_value_bytes: 255,
            valid_tlds: vec!["lsk".to_string(), "lisk".to_string()],
        }
    }
}
