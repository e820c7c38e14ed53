//! # Host Model
//!
//! A host is what the user typed on the command line once it has been
//! recognised as either a domain name or a dotted-decimal IPv4 address.
//!
//! Validation is deliberately permissive for addresses: each group is one to
//! three digits and nothing checks that it fits in an octet, so `999.1.1.1`
//! is accepted and left for the external tools to reject.

use std::fmt;

use regex::Regex;

use crate::error::{IpqError, IpqResult};

/// One or more labels (1-63 word characters or hyphens, never starting or
/// ending with a hyphen) followed by a 2-6 character top-level label that
/// starts with a letter.
const DOMAIN_PATTERN: &str = r"^(?:(?:[A-Za-z0-9_]|[A-Za-z0-9_][A-Za-z0-9_-]{0,61}[A-Za-z0-9_])\.)+[A-Za-z][A-Za-z0-9_]{1,5}$";
const IPV4_PATTERN: &str = r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$";

/// A validated host, lower-cased so it can be handed to `whois`, `nslookup`
/// and `ping` as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Host {
    Domain(String),
    Ipv4(String),
}

impl Host {
    pub fn as_str(&self) -> &str {
        match self {
            Host::Domain(name) => name,
            Host::Ipv4(addr) => addr,
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Host::Domain(_))
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the compiled host patterns. Build it once and reuse it.
pub struct HostClassifier {
    domain: Regex,
    ipv4: Regex,
}

impl HostClassifier {
    pub fn new() -> IpqResult<Self> {
        Ok(Self {
            domain: Regex::new(DOMAIN_PATTERN)?,
            ipv4: Regex::new(IPV4_PATTERN)?,
        })
    }

    /// Classifies `raw` as a domain or an IPv4 address.
    ///
    /// The domain pattern is tried first. The two never overlap because a
    /// top-level label has to start with a letter.
    pub fn classify(&self, raw: &str) -> IpqResult<Host> {
        if self.domain.is_match(raw) {
            return Ok(Host::Domain(raw.to_lowercase()));
        }

        if self.ipv4.is_match(raw) {
            return Ok(Host::Ipv4(raw.to_string()));
        }

        Err(IpqError::InvalidHost(format!(
            "'{raw}' is not a valid domain or IP address."
        )))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
