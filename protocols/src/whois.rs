//! WHOIS response parsing.
//!
//! Two shapes of response are handled: the registry record for a domain and
//! the RIR record for an address. Both are free-form `label: value` text that
//! varies between registries, so extraction is line-anchored and forgiving.

use std::collections::BTreeSet;

use ipq_common::IpqResult;
use ipq_common::record::{IpDetails, WhoisRecord};
use regex::Regex;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WhoisField {
    Domain,
    Registrar,
    Created,
    Updated,
    Expires,
    Status,
    Nameservers,
}

/// Field and the label it is matched by. Labels are lower case because the
/// response is lower-cased before matching.
const WHOIS_FIELDS: [(WhoisField, &str); 7] = [
    (WhoisField::Domain, "domain name"),
    (WhoisField::Registrar, "registrar"),
    (WhoisField::Created, "creation date"),
    (WhoisField::Updated, "updated date"),
    (WhoisField::Expires, "registry expiry date"),
    (WhoisField::Status, "domain status"),
    (WhoisField::Nameservers, "name server"),
];

/// Where an extracted value goes: single fields keep the first match, set
/// fields keep every distinct match.
enum Slot<'a> {
    One(&'a mut String),
    Many(&'a mut BTreeSet<String>),
}

impl WhoisField {
    fn slot(self, record: &mut WhoisRecord) -> Slot<'_> {
        match self {
            WhoisField::Domain => Slot::One(&mut record.domain),
            WhoisField::Registrar => Slot::One(&mut record.registrar),
            WhoisField::Created => Slot::One(&mut record.created),
            WhoisField::Updated => Slot::One(&mut record.updated),
            WhoisField::Expires => Slot::One(&mut record.expires),
            WhoisField::Status => Slot::Many(&mut record.status),
            WhoisField::Nameservers => Slot::Many(&mut record.nameservers),
        }
    }
}

/// Parses domain WHOIS responses into a [`WhoisRecord`].
pub struct WhoisParser {
    fields: Vec<(WhoisField, Regex)>,
}

impl WhoisParser {
    pub fn new() -> IpqResult<Self> {
        let fields = WHOIS_FIELDS
            .iter()
            .map(|&(field, label)| -> IpqResult<(WhoisField, Regex)> {
                let pattern = format!(r"(?m)^\s*{}: (.*)$", regex::escape(label));
                Ok((field, Regex::new(&pattern)?))
            })
            .collect::<IpqResult<Vec<_>>>()?;

        Ok(Self { fields })
    }

    /// Extracts every known field from `raw`.
    ///
    /// Anything not present keeps the record default, so an empty or
    /// unrecognised response yields a record of sentinels.
    pub fn parse(&self, raw: &str) -> WhoisRecord {
        let text = raw.to_lowercase();
        let mut record = WhoisRecord::default();

        for (field, rgx) in &self.fields {
            match field.slot(&mut record) {
                Slot::One(value) => {
                    if let Some(found) = first_capture(rgx, &text) {
                        *value = found;
                    }
                }
                Slot::Many(values) => values.extend(all_captures(rgx, &text)),
            }
        }

        debug!(
            domain = %record.domain,
            nameservers = record.nameservers.len(),
            status = record.status.len(),
            "parsed whois record"
        );
        record
    }
}

/// Labels for the address fields. These are regex fragments, not literals:
/// postal codes show up as `PostalCode`, `Postal Code` and with prefixes.
const IP_FIELDS: [(IpField, &str); 4] = [
    (IpField::City, "City"),
    (IpField::Country, "Country"),
    (IpField::Organization, "OrgName"),
    (IpField::Postal, r".*Postal\s?Code"),
];

#[derive(Clone, Copy, Debug)]
enum IpField {
    City,
    Country,
    Organization,
    Postal,
}

impl IpField {
    fn slot(self, details: &mut IpDetails) -> &mut String {
        match self {
            IpField::City => &mut details.city,
            IpField::Country => &mut details.country,
            IpField::Organization => &mut details.organization,
            IpField::Postal => &mut details.postal,
        }
    }
}

/// Parses RIR WHOIS responses for an address into [`IpDetails`].
///
/// Each field stands alone; a response with only a country still fills
/// in the country.
pub struct IpDetailsParser {
    fields: Vec<(IpField, Regex)>,
}

impl IpDetailsParser {
    pub fn new() -> IpqResult<Self> {
        let fields = IP_FIELDS
            .iter()
            .map(|&(field, label)| -> IpqResult<(IpField, Regex)> {
                let pattern = format!(r"(?m)^{label}:[ \t]+(.*)$");
                Ok((field, Regex::new(&pattern)?))
            })
            .collect::<IpqResult<Vec<_>>>()?;

        Ok(Self { fields })
    }

    pub fn parse(&self, raw: &str) -> IpDetails {
        let mut details = IpDetails::default();

        for (field, rgx) in &self.fields {
            if let Some(found) = first_capture(rgx, raw) {
                *field.slot(&mut details) = found;
            }
        }

        details
    }
}

/// Value of the first matching line, if it is not blank.
fn first_capture(rgx: &Regex, text: &str) -> Option<String> {
    rgx.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

fn all_captures<'a>(rgx: &'a Regex, text: &'a str) -> impl Iterator<Item = String> + 'a {
    rgx.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}
