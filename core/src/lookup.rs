//! Lookup operations built on the [`CommandRunner`] seam.
//!
//! Every operation is one or two external commands followed by a parser.
//! Which failures are fatal is decided here: the forward lookup that finds
//! the target address is required, the reverse lookup for its name is not.

use std::sync::Arc;

use ipq_common::network::host::Host;
use ipq_common::record::{IpDetails, IpRecord, NOT_FOUND, PingResult, WhoisRecord};
use ipq_common::{IpqError, IpqResult};
use ipq_protocols::nslookup::NslookupParser;
use ipq_protocols::whois::{IpDetailsParser, WhoisParser};
use tracing::debug;

use crate::command::{self, CommandRunner, NSLOOKUP, PING, WHOIS};

#[cfg(windows)]
const PING_COUNT_FLAG: &str = "-n";
#[cfg(not(windows))]
const PING_COUNT_FLAG: &str = "-c";

pub struct LookupService {
    runner: Arc<dyn CommandRunner>,
    whois: WhoisParser,
    ip_details: IpDetailsParser,
    nslookup: NslookupParser,
}

impl LookupService {
    pub fn new(runner: Arc<dyn CommandRunner>) -> IpqResult<Self> {
        Ok(Self {
            runner,
            whois: WhoisParser::new()?,
            ip_details: IpDetailsParser::new()?,
            nslookup: NslookupParser::new()?,
        })
    }

    /// Registration record for a domain.
    pub async fn whois(&self, host: &Host) -> IpqResult<WhoisRecord> {
        let raw = self.call(WHOIS, host.as_str()).await?;
        Ok(self.whois.parse(&raw))
    }

    /// Address, name and location for `host`.
    pub async fn ip_info(&self, host: &Host) -> IpqResult<IpRecord> {
        let ip = self.resolve_ip(host).await?;
        let hostname = self.resolve_hostname(&ip).await;
        let details = self.enrich_ip(&ip).await?;

        Ok(IpRecord {
            ip,
            hostname,
            details,
        })
    }

    /// The address to query. Domains go through `nslookup`; addresses are
    /// used as they are.
    pub async fn resolve_ip(&self, host: &Host) -> IpqResult<String> {
        match host {
            Host::Ipv4(addr) => Ok(addr.clone()),
            Host::Domain(name) => {
                let output = self.call(NSLOOKUP, name).await?;
                self.nslookup
                    .address(&output)
                    .ok_or_else(|| IpqError::LookupFailed {
                        command: NSLOOKUP.to_string(),
                        host: name.clone(),
                    })
            }
        }
    }

    /// Reverse lookup of `ip`. Never fails: any problem becomes the
    /// [`NOT_FOUND`] sentinel.
    pub async fn resolve_hostname(&self, ip: &str) -> String {
        let found = match self.call(NSLOOKUP, ip).await {
            Ok(output) => self.nslookup.hostname(&output),
            Err(err) => {
                debug!(ip, %err, "reverse lookup failed");
                None
            }
        };

        found.unwrap_or_else(|| {
            debug!(ip, "no reverse name");
            NOT_FOUND.to_string()
        })
    }

    /// Location and owner of `ip` from its RIR record.
    pub async fn enrich_ip(&self, ip: &str) -> IpqResult<IpDetails> {
        let raw = self.call(WHOIS, ip).await?;
        Ok(self.ip_details.parse(&raw))
    }

    pub async fn ping(&self, host: &Host, count: u8) -> IpqResult<PingResult> {
        let args = [
            PING_COUNT_FLAG.to_string(),
            count.to_string(),
            host.as_str().to_lowercase(),
        ];
        let output = command::invoke(self.runner.as_ref(), PING, &args).await?;
        Ok(PingResult { output })
    }

    async fn call(&self, command: &str, target: &str) -> IpqResult<String> {
        command::invoke(self.runner.as_ref(), command, &[target.to_lowercase()]).await
    }
}
