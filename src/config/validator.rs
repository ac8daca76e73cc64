//! Field-level input validators.
//!
//! Each validator is a pure function from a candidate value to a
//! [`Validation`] outcome. Rejection is recoverable: the wizard prints the
//! message and re-prompts. The region validator can additionally signal
//! [`Validation::Unrecognized`], which asks the user for an explicit
//! override confirmation instead of rejecting outright.

use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

/// Outcome of validating a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Value accepted.
    Valid,
    /// Value rejected with a message; the wizard re-prompts.
    Invalid(String),
    /// Value not recognized; accept only after explicit confirmation.
    Unrecognized(String),
}

/// A field validator function.
pub type Validator = fn(&str) -> Validation;

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid regex is valid")
});

/// Azure region codes accepted without confirmation. Not exhaustive; an
/// unlisted region triggers an override confirmation rather than a hard
/// rejection.
pub const AZURE_REGIONS: &[&str] = &[
    "eastus",
    "eastus2",
    "westus",
    "westus2",
    "westus3",
    "centralus",
    "northcentralus",
    "southcentralus",
    "canadacentral",
    "canadaeast",
    "brazilsouth",
    "northeurope",
    "westeurope",
    "francecentral",
    "uksouth",
    "ukwest",
    "germanywc",
    "norwayeast",
    "switzerlandnorth",
    "uaenorth",
    "southafricanorth",
    "australiaeast",
    "australiasoutheast",
    "southeastasia",
    "eastasia",
    "japaneast",
    "japanwest",
    "koreacentral",
    "centralindia",
    "southindia",
    "westindia",
];

/// ANF service levels.
pub const SERVICE_LEVELS: &[&str] = &["Standard", "Premium", "Ultra"];

/// Volume protocol types.
pub const PROTOCOLS: &[&str] = &["NFSv3", "NFSv4.1", "CIFS"];

/// Replication schedules.
pub const SCHEDULES: &[&str] = &["Hourly", "Daily", "Weekly"];

/// Validate the canonical 8-4-4-4-12 UUID grouping, case-insensitive.
pub fn validate_uuid(value: &str) -> Validation {
    if UUID_REGEX.is_match(value) {
        Validation::Valid
    } else {
        Validation::Invalid(
            "Must be a valid UUID format (xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)".to_string(),
        )
    }
}

/// Validate an Azure region against the allow-list.
///
/// An unlisted region is not rejected outright; the caller asks for an
/// explicit override confirmation before accepting it.
pub fn validate_azure_region(value: &str) -> Validation {
    if AZURE_REGIONS.contains(&value.to_lowercase().as_str()) {
        Validation::Valid
    } else {
        Validation::Unrecognized(format!("'{value}' might not be a valid Azure region"))
    }
}

fn validate_enum(value: &str, allowed: &[&str]) -> Validation {
    if allowed.contains(&value) {
        Validation::Valid
    } else {
        Validation::Invalid(format!("Must be one of: {}", allowed.join(", ")))
    }
}

/// Validate an ANF service level.
pub fn validate_service_level(value: &str) -> Validation {
    validate_enum(value, SERVICE_LEVELS)
}

/// Validate a volume protocol type.
pub fn validate_protocol(value: &str) -> Validation {
    validate_enum(value, PROTOCOLS)
}

/// Validate a replication schedule.
pub fn validate_replication_schedule(value: &str) -> Validation {
    validate_enum(value, SCHEDULES)
}

/// Validate a dotted-quad IPv4 address (four octets, each 0-255).
pub fn validate_ip_address(value: &str) -> Validation {
    if value.parse::<Ipv4Addr>().is_ok() {
        Validation::Valid
    } else {
        Validation::Invalid("Must be a valid IP address (e.g., 192.168.1.100)".to_string())
    }
}

/// Validate a plain decimal number (digits only, no sign or point).
pub fn validate_numeric(value: &str) -> Validation {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Validation::Valid
    } else {
        Validation::Invalid("Must be a number".to_string())
    }
}
