use std::time::Duration;

/// Number of echo requests sent when pinging.
pub const DEFAULT_PING_COUNT: u8 = 1;

pub struct Config {
    /// Include the domain WHOIS lookup alongside the IP lookup.
    pub whois: bool,
    /// Ping the host instead of running any lookup.
    pub ping: bool,
    pub ping_count: u8,
    /// Upper bound for every external command.
    ///
    /// `None` lets a hung `whois` or `nslookup` block the invocation forever.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            whois: false,
            ping: false,
            ping_count: DEFAULT_PING_COUNT,
            timeout: None,
        }
    }
}
