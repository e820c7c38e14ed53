//! Bordered text blocks for the terminal.
//!
//! Field rows alternate between two colors; the value column starts at a
//! fixed offset so labels line up.

use std::collections::BTreeSet;

use colored::*;
use ipq_common::record::{IpRecord, WhoisRecord};

const BORDER_WIDTH: usize = 29;
const LABEL_WIDTH: usize = 14;

pub fn ip_block(record: &IpRecord) -> String {
    Block::new("IP INFO")
        .field("IP", &record.ip)
        .field("Hostname", &record.hostname)
        .field("City", &record.details.city)
        .field("Country", &record.details.country)
        .field("Postal code", &record.details.postal)
        .field("Organization", &record.details.organization)
        .finish()
}

pub fn whois_block(record: &WhoisRecord) -> String {
    // Status values carry a trailing ICANN URL; only the code is shown.
    let status: BTreeSet<&str> = record
        .status
        .iter()
        .filter_map(|s| s.split_whitespace().next())
        .collect();

    Block::new("WHOIS")
        .field("Domain", &record.domain)
        .field("Registrar", &record.registrar)
        .field("Created", &record.created)
        .field("Updated", &record.updated)
        .field("Expires", &record.expires)
        .list("Nameservers", record.nameservers.iter().map(String::as_str))
        .list("Status", status)
        .finish()
}

struct Block {
    lines: Vec<String>,
    rows: usize,
}

impl Block {
    fn new(title: &str) -> Self {
        let padding = BORDER_WIDTH.saturating_sub(title.len() + 2);
        let left = padding / 2;
        let right = padding - left;
        let line = format!(
            "{} {} {}",
            "=".repeat(left).yellow().bold(),
            title.green().bold(),
            "=".repeat(right).yellow().bold()
        );

        Self {
            lines: vec![line],
            rows: 0,
        }
    }

    fn field(mut self, label: &str, value: &str) -> Self {
        let text = format!("{:<width$}{}", format!("{label}:"), value, width = LABEL_WIDTH);
        let line = self.paint(text).to_string();
        self.lines.push(line);
        self.rows += 1;
        self
    }

    fn list<'a>(mut self, label: &str, items: impl IntoIterator<Item = &'a str>) -> Self {
        let mut lines = vec![self.paint(format!("{label}:")).to_string()];
        for item in items {
            lines.push(self.paint(format!(" - {item}")).to_string());
        }
        self.lines.extend(lines);
        self.rows += 1;
        self
    }

    fn paint(&self, text: String) -> ColoredString {
        if self.rows % 2 == 0 {
            text.cyan().bold()
        } else {
            text.magenta().bold()
        }
    }

    fn finish(mut self) -> String {
        self.lines
            .push("=".repeat(BORDER_WIDTH).yellow().bold().to_string());
        self.lines.join("\n")
    }
}
