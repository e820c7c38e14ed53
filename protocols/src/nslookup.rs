//! Extraction of forward and reverse answers from `nslookup` output.

use ipq_common::IpqResult;
use regex::Regex;

/// First address in the non-authoritative answer block.
const ADDRESS_PATTERN: &str = r"\n\nNon-authoritative answer:\n.*\nAddress: (.*)\n";
/// Name from a PTR answer such as `8.8.8.8.in-addr.arpa	name = dns.google.`
const NAME_PATTERN: &str = r"name = (.*)\n";

pub struct NslookupParser {
    address: Regex,
    name: Regex,
}

impl NslookupParser {
    pub fn new() -> IpqResult<Self> {
        Ok(Self {
            address: Regex::new(ADDRESS_PATTERN)?,
            name: Regex::new(NAME_PATTERN)?,
        })
    }

    /// Resolved address from a forward lookup.
    pub fn address(&self, output: &str) -> Option<String> {
        capture(&self.address, output)
    }

    /// Host name from a reverse lookup.
    pub fn hostname(&self, output: &str) -> Option<String> {
        capture(&self.name, output)
    }
}

fn capture(rgx: &Regex, output: &str) -> Option<String> {
    rgx.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}
