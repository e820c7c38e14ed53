//! Parsers for the text printed by the external lookup tools.
//!
//! Nothing here runs a process. Every parser takes the captured output and
//! returns what it could find; missing fields are never errors.

pub mod nslookup;
pub mod whois;
