//! Input validation for registry operations.
//!
//! Stateless checks run before any state is read: TTL and term bounds for
//! registration, name shape and TLD membership, and record-list shape for
//! updates. Record-type membership in the allow-list is enforced by
//! [`RecordType`](crate::types::RecordType)'s `TryFrom<u8>` at the host
//! boundary, so it does not reappear here.

use std::collections::HashSet;
use std::fmt;

use crate::config::RegistryConfig;
use crate::types::RecordEntry;

/// Validation error with structured context.
///
/// Contains the specific constraint that was violated and the field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// Description of the violated constraint.
    pub constraint: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

impl std::error::Error for ValidationError {}

/// Validates the TTL of a registration.
///
/// # Errors
///
/// Returns [`ValidationError`] if `ttl` is below `config.min_ttl_secs`.
pub fn validate_ttl(ttl: u32, config: &RegistryConfig) -> Result<(), ValidationError> {
    if ttl < config.min_ttl_secs {
        return Err(ValidationError {
            field: "ttl".to_string(),
            constraint: format!("{} is below the minimum of {} seconds", ttl, config.min_ttl_secs),
        });
    }
    Ok(())
}

/// Validates a registration term in whole years.
///
/// # Errors
///
/// Returns [`ValidationError`] if `years` is outside
/// `config.min_register_years..=config.max_register_years`.
pub fn validate_term(years: u32, config: &RegistryConfig) -> Result<(), ValidationError> {
    if years < config.min_register_years || years > config.max_register_years {
        return Err(ValidationError {
            field: "register_for".to_string(),
            constraint: format!(
                "term must be between {} and {} years, got {}",
                config.min_register_years, config.max_register_years, years
            ),
        });
    }
    Ok(())
}

/// Validates the shape of a name to register.
///
/// Names must:
/// - Contain exactly one `.` separator (second-level-domain form)
/// - Have a non-empty label before the separator
/// - End in a TLD from `config.valid_tlds`
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first violated rule.
pub fn validate_name(name: &str, config: &RegistryConfig) -> Result<(), ValidationError> {
    if name.chars().filter(|c| *c == '.').count() != 1 {
        return Err(ValidationError {
            field: "name".to_string(),
            constraint: "only second-level names can be registered, e.g. example.lsk".to_string(),
        });
    }

    // Exactly one dot, so split_once always succeeds here.
    let (label, tld) = name.split_once('.').unwrap_or((name, ""));

    if label.is_empty() {
        return Err(ValidationError {
            field: "name".to_string(),
            constraint: "name label must not be empty".to_string(),
        });
    }

    if !config.valid_tlds.iter().any(|valid| valid == tld) {
        return Err(ValidationError {
            field: "name".to_string(),
            constraint: format!(
                "\"{}\" is not a valid TLD; valid TLDs are {}",
                tld,
                config.valid_tlds.join(", ")
            ),
        });
    }

    Ok(())
}

/// Validates a record list for an update.
///
/// The list must:
/// - Not exceed `config.max_records` entries
/// - Contain pairwise-unique `(record_type, label)` pairs
/// - Keep every label and value length within the configured bounds
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first violated rule.
pub fn validate_records(
    records: &[RecordEntry],
    config: &RegistryConfig,
) -> Result<(), ValidationError> {
    if records.len() > config.max_records {
        return Err(ValidationError {
            field: "records".to_string(),
            constraint: format!(
                "at most {} records can be associated, got {}",
                config.max_records,
                records.len()
            ),
        });
    }

    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert((record.record_type, record.label.as_str())) {
            return Err(ValidationError {
                field: "records".to_string(),
                constraint: format!(
                    "duplicate ({}, \"{}\") entry; records must be unique by type and label",
                    record.record_type, record.label
                ),
            });
        }

        if record.label.len() < config.min_label_bytes || record.label.len() > config.max_label_bytes
        {
            return Err(ValidationError {
                field: "records".to_string(),
                constraint: format!(
                    "label length must be between {} and {} bytes, got {}",
                    config.min_label_bytes,
                    config.max_label_bytes,
                    record.label.len()
                ),
            });
        }

        if record.value.len() < config.min_value_bytes || record.value.len() > config.max_value_bytes
        {
            return Err(ValidationError {
                field: "records".to_string(),
                constraint: format!(
                    "value length must be between {} and {} bytes, got {}",
                    config.min_value_bytes,
                    config.max_value_bytes,
                    record.value.len()
                ),
            });
        }
    }

    Ok(())
}
