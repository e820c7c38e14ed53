pub mod query;

use std::time::Duration;

use clap::{ArgAction, Parser};
use ipq_common::config::{Config, DEFAULT_PING_COUNT};

#[derive(Parser)]
#[command(name = "ipq", version, disable_version_flag = true)]
#[command(about = "Quickly gather IP and domain name information.")]
pub struct CommandLine {
    /// Domain name or IPv4 address to look up
    pub host: String,

    /// Include WHOIS data in results
    #[arg(short, long)]
    pub whois: bool,

    /// Ping the host
    #[arg(short, long)]
    pub ping: bool,

    /// Give up on any external command after this many seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log what ipq is doing to stderr
    #[arg(long)]
    pub debug: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            whois: self.whois,
            ping: self.ping,
            ping_count: DEFAULT_PING_COUNT,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
