//! Fans a query out to one worker per source and reassembles the results.
//!
//! Workers finish in any order. Each one reports on a bounded channel tagged
//! with its [`Source`], and the engine lays the blocks out by source, so the
//! IP block always comes before the WHOIS block.

use std::collections::BTreeMap;
use std::sync::Arc;

use ipq_common::config::Config;
use ipq_common::network::host::Host;
use ipq_common::{IpqError, IpqResult};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info_span, Instrument};

use crate::lookup::LookupService;
use crate::render;

/// A kind of information gathered about a host. Declaration order is
/// output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Source {
    IpInfo,
    Whois,
}

impl Source {
    /// Sources a non-ping query needs.
    fn requested(cfg: &Config) -> Vec<Source> {
        let mut sources = vec![Source::IpInfo];
        if cfg.whois {
            sources.push(Source::Whois);
        }
        sources
    }
}

pub struct QueryEngine {
    lookup: Arc<LookupService>,
}

impl QueryEngine {
    pub fn new(lookup: LookupService) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Gathers everything `cfg` asks for about `host` and returns one
    /// rendered block per source.
    ///
    /// Ping replaces every other source and returns the raw `ping` output.
    /// Otherwise an error from any worker fails the whole query, even if
    /// the other worker succeeded.
    pub async fn query(&self, host: &Host, cfg: &Config) -> IpqResult<Vec<String>> {
        if cfg.ping {
            let result = self.lookup.ping(host, cfg.ping_count).await?;
            return Ok(vec![result.output]);
        }

        if cfg.whois && !host.is_domain() {
            return Err(IpqError::InvalidHost(
                "You must pass a domain as the host for the '-w' flag.".to_string(),
            ));
        }

        let sources = Source::requested(cfg);
        let (tx, mut rx) = mpsc::channel::<(Source, IpqResult<String>)>(sources.len());
        let mut workers = JoinSet::new();

        for &source in &sources {
            let tx = tx.clone();
            let lookup = Arc::clone(&self.lookup);
            let host = host.clone();
            let span = info_span!("worker", ?source);

            workers.spawn(
                async move {
                    let block = run_source(&lookup, source, &host).await;
                    debug!(ok = block.is_ok(), "worker finished");
                    // Capacity matches the number of workers, so this never waits.
                    if tx.send((source, block)).await.is_err() {
                        debug!("result channel closed before the worker reported");
                    }
                }
                .instrument(span),
            );
        }
        drop(tx);

        let mut failed = None;
        while let Some(joined) = workers.join_next().await {
            if let Err(err) = joined {
                failed.get_or_insert(IpqError::Worker(err.to_string()));
            }
        }
        if let Some(err) = failed {
            return Err(err);
        }

        let mut blocks = BTreeMap::new();
        for _ in 0..sources.len() {
            let Some((source, block)) = rx.recv().await else {
                return Err(IpqError::Worker("a worker exited without reporting".to_string()));
            };
            blocks.insert(source, block);
        }

        blocks.into_values().collect()
    }
}

async fn run_source(lookup: &LookupService, source: Source, host: &Host) -> IpqResult<String> {
    match source {
        Source::IpInfo => {
            let record = lookup.ip_info(host).await?;
            Ok(render::ip_block(&record))
        }
        Source::Whois => {
            let record = lookup.whois(host).await?;
            Ok(render::whois_block(&record))
        }
    }
}
