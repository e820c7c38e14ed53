//! Error taxonomy shared by every `ipq` crate.

use std::string::FromUtf8Error;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IpqError {
    /// The host is neither a domain nor an IPv4 address, or an IP address was
    /// given where only a domain makes sense.
    #[error("{0}")]
    InvalidHost(String),

    #[error("ipq requires the '{0}' command, please install it.")]
    MissingExecutable(String),

    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' did not return valid UTF-8: {source}")]
    Decode {
        command: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Something went wrong with '{command}' for '{host}'")]
    LookupFailed { command: String, host: String },

    #[error("'{command}' did not finish within {}s", .after.as_secs())]
    Timeout { command: String, after: Duration },

    /// A worker task panicked or was cancelled before reporting.
    #[error("query worker failed: {0}")]
    Worker(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type IpqResult<T> = std::result::Result<T, IpqError>;
