//! Shared types for `ipq`: validated hosts, parsed records, errors and the
//! per-invocation configuration.

pub mod config;
pub mod error;
pub mod network;
pub mod record;

pub use error::{IpqError, IpqResult};
