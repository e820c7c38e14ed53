#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use ipq_common::config::Config;
use ipq_common::network::host::{Host, HostClassifier};
use ipq_common::IpqError;

use crate::utils::{engine, ScriptedRunner};

fn domain() -> Host {
    HostClassifier::new().unwrap().classify("example.com").unwrap()
}

fn with_whois() -> Config {
    Config {
        whois: true,
        ..Config::default()
    }
}

fn plain() {
    colored::control::set_override(false);
}

/// Whichever worker finishes first, the IP block is printed first.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ip_block_precedes_whois_block() {
    plain();
    let slow = Duration::from_millis(150);

    let slow_ip = ScriptedRunner::example_com().delay("nslookup", "example.com", slow);
    let slow_whois = ScriptedRunner::example_com().delay("whois", "example.com", slow);

    for runner in [slow_ip, slow_whois] {
        let runner = Arc::new(runner);
        let blocks = engine(&runner)
            .query(&domain(), &with_whois())
            .await
            .expect("query succeeds");

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("========== IP INFO"), "{}", blocks[0]);
        assert!(blocks[1].starts_with("=========== WHOIS"), "{}", blocks[1]);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn ordering_holds_across_repeated_runs() {
    plain();
    for round in 0..10u64 {
        let runner = ScriptedRunner::example_com()
            .delay("whois", "example.com", Duration::from_millis(round % 3 * 10))
            .delay("nslookup", "example.com", Duration::from_millis((round + 1) % 3 * 10));
        let runner = Arc::new(runner);

        let blocks = engine(&runner)
            .query(&domain(), &with_whois())
            .await
            .unwrap();

        assert!(blocks[0].contains("IP INFO"));
        assert!(blocks[1].contains("WHOIS"));
    }
}

#[tokio::test]
async fn ip_only_query_returns_one_block() {
    plain();
    let runner = Arc::new(ScriptedRunner::example_com());
    let blocks = engine(&runner)
        .query(&domain(), &Config::default())
        .await
        .unwrap();

    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("IP:           93.184.215.14"));
    assert!(blocks[0].contains("Hostname:     edge.example.net."));
    assert!(blocks[0].contains("City:         Los Angeles"));
    assert!(blocks[0].contains("Organization: Edgecast Inc."));
    assert!(!runner
        .calls()
        .iter()
        .any(|(command, args)| command == "whois" && args == &["example.com".to_string()]));
}

#[tokio::test]
async fn whois_block_dedups_nameservers() {
    plain();
    let runner = Arc::new(ScriptedRunner::example_com());
    let blocks = engine(&runner).query(&domain(), &with_whois()).await.unwrap();

    assert_eq!(blocks[1].matches(" - a.iana-servers.net").count(), 1);
    assert!(blocks[1].contains(" - clientdeleteprohibited"));
    assert!(!blocks[1].contains("https://icann.org"));
    assert!(blocks[1].contains("Updated:      Not Found"));
}

#[tokio::test]
async fn ping_short_circuits_everything_else() {
    let runner = Arc::new(
        ScriptedRunner::example_com().answer("ping", "example.com", "PING example.com: 1 packets transmitted\n"),
    );
    let cfg = Config {
        ping: true,
        whois: true,
        ..Config::default()
    };

    let blocks = engine(&runner).query(&domain(), &cfg).await.unwrap();

    assert_eq!(blocks, vec!["PING example.com: 1 packets transmitted\n".to_string()]);
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "ping");
    assert_eq!(calls[0].1[1], "1");
}

#[tokio::test]
async fn whois_for_an_address_is_rejected_before_any_command() {
    let runner = Arc::new(ScriptedRunner::example_com());
    let host = HostClassifier::new().unwrap().classify("8.8.8.8").unwrap();

    let result = engine(&runner).query(&host, &with_whois()).await;

    assert!(matches!(result, Err(IpqError::InvalidHost(_))));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn missing_whois_is_never_spawned() {
    let runner = Arc::new(ScriptedRunner::example_com().missing("whois"));

    let result = engine(&runner).query(&domain(), &with_whois()).await;

    assert!(matches!(result, Err(IpqError::MissingExecutable(ref name)) if name == "whois"));
    assert!(!runner.ran("whois"));
}

/// The WHOIS worker succeeds here, but the IP worker cannot run at all.
#[tokio::test]
async fn one_failed_worker_fails_the_query() {
    let runner = Arc::new(ScriptedRunner::example_com().missing("nslookup"));

    let result = engine(&runner).query(&domain(), &with_whois()).await;

    assert!(matches!(result, Err(IpqError::MissingExecutable(ref name)) if name == "nslookup"));
    assert!(runner.ran("whois"));
}

/// The WHOIS worker dies mid-query while the IP worker finishes normally.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn panicking_worker_is_reported_as_worker_error() {
    let runner = Arc::new(ScriptedRunner::example_com().panics("whois", "example.com"));

    let result = engine(&runner).query(&domain(), &with_whois()).await;

    assert!(matches!(result, Err(IpqError::Worker(_))), "got {result:?}");
    assert!(runner.ran("nslookup"));
}

#[tokio::test]
async fn unresolvable_domain_fails() {
    let runner = Arc::new(ScriptedRunner::new().answer(
        "nslookup",
        "example.com",
        "** server can't find example.com: NXDOMAIN\n",
    ));

    let result = engine(&runner).query(&domain(), &Config::default()).await;

    assert!(matches!(result, Err(IpqError::LookupFailed { .. })));
}

#[tokio::test]
async fn address_without_reverse_name_still_succeeds() {
    plain();
    let runner = Arc::new(
        ScriptedRunner::new()
            .answer("whois", "10.1.2.3", "Country:        ZZ\n")
            .answer(
                "nslookup",
                "10.1.2.3",
                "** server can't find 3.2.1.10.in-addr.arpa: NXDOMAIN\n",
            )
            .exit("nslookup", "10.1.2.3", 1),
    );
    let host = HostClassifier::new().unwrap().classify("10.1.2.3").unwrap();

    let blocks = engine(&runner).query(&host, &Config::default()).await.unwrap();

    assert!(blocks[0].contains("Hostname:     Not Found"));
    assert!(blocks[0].contains("Country:      ZZ"));
    assert!(blocks[0].contains("City:         Not Found"));
    assert!(runner.ran("nslookup"));
}
