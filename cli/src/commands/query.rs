use std::sync::Arc;

use ipq_common::network::host::HostClassifier;
use ipq_core::command::SystemCommands;
use ipq_core::lookup::LookupService;
use ipq_core::query::QueryEngine;
use tracing::debug;

use crate::commands::CommandLine;
use crate::terminal::{print, spinner};

pub async fn query(args: &CommandLine) -> anyhow::Result<()> {
    let cfg = args.to_config();
    let host = HostClassifier::new()?.classify(&args.host)?;
    debug!(%host, whois = cfg.whois, ping = cfg.ping, "classified host");

    let runner = Arc::new(SystemCommands::new(cfg.timeout));
    let engine = QueryEngine::new(LookupService::new(runner)?);

    if !cfg.ping {
        spinner::start(format!("Querying {host}..."));
    }
    let result = engine.query(&host, &cfg).await;
    spinner::finish();

    print::output(&result?);
    Ok(())
}
