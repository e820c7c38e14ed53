//! Records assembled from external command output.

use std::collections::BTreeSet;

/// Placeholder for a field that could not be extracted.
pub const NOT_FOUND: &str = "Not Found";

/// Registration data for a domain.
///
/// `status` and `nameservers` are sets: duplicates in the raw response
/// collapse and their original order is not kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhoisRecord {
    pub domain: String,
    pub registrar: String,
    pub created: String,
    pub updated: String,
    pub expires: String,
    pub status: BTreeSet<String>,
    pub nameservers: BTreeSet<String>,
}

impl Default for WhoisRecord {
    fn default() -> Self {
        Self {
            domain: NOT_FOUND.to_string(),
            registrar: NOT_FOUND.to_string(),
            created: NOT_FOUND.to_string(),
            updated: NOT_FOUND.to_string(),
            expires: NOT_FOUND.to_string(),
            status: BTreeSet::new(),
            nameservers: BTreeSet::new(),
        }
    }
}

/// Fields pulled from the RIR `whois` response for an address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpDetails {
    pub city: String,
    pub country: String,
    pub organization: String,
    pub postal: String,
}

impl Default for IpDetails {
    fn default() -> Self {
        Self {
            city: NOT_FOUND.to_string(),
            country: NOT_FOUND.to_string(),
            organization: NOT_FOUND.to_string(),
            postal: NOT_FOUND.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpRecord {
    pub ip: String,
    pub hostname: String,
    pub details: IpDetails,
}

/// Raw `ping` output, passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PingResult {
    pub output: String,
}
