//! # ipq core
//!
//! Runs the external lookup tools and turns their output into rendered
//! blocks.
//!
//! * [`command`]: the seam to `whois`, `nslookup` and `ping`.
//! * [`lookup`]: one operation per piece of information, built on the seam.
//! * [`query`]: fans the requested lookups out to workers and reassembles
//!   their blocks in a fixed order.
//! * [`render`]: the bordered, colored blocks.

pub mod command;
pub mod lookup;
pub mod query;
pub mod render;
