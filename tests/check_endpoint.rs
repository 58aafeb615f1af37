//! Report endpoint integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use domainscope::config::endpoints::RdapRoutes;
use domainscope::server::report_router;
use domainscope::Sources;

fn dead_resolver() -> Arc<TokioAsyncResolver> {
    let nameservers =
        NameServerConfigGroup::from_ips_clear(&["127.0.0.1".parse().unwrap()], 1, true);
    let config = ResolverConfig::from_parts(None, vec![], nameservers);
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_millis(250);
    opts.attempts = 1;
    opts.ndots = 0;
    Arc::new(TokioAsyncResolver::tokio(config, opts))
}

/// Serves the report router on an ephemeral port.
async fn spawn_server() -> SocketAddr {
    let client = Arc::new(
        reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("client should build"),
    );
    let sources = Sources::new(client, dead_resolver())
        .with_rdap_routes(RdapRoutes::single("http://127.0.0.1:9/rdap"))
        .with_ipinfo_base("http://127.0.0.1:9")
        .with_adapter_timeout(Duration::from_secs(2))
        .with_dns_type_timeout(Duration::from_secs(1));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind ephemeral port");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, report_router(sources))
            .await
            .expect("server should run");
    });

    addr
}

#[tokio::test]
async fn missing_domain_is_rejected_before_any_lookup() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/check"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("error body is JSON");
    assert_eq!(body["error"], "Thiếu domain");
}

#[tokio::test]
async fn blank_domain_is_rejected() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/check?domain=%20%20"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn check_returns_complete_report_despite_dead_upstreams() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/check?domain=unreachable.invalid"))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("report body is JSON");
    assert_eq!(body["domain"], "unreachable.invalid");
    assert_eq!(body["whois"]["registrar"], "Không rõ");
    assert_eq!(body["dns"]["A"], serde_json::json!([]));
    assert_eq!(body["ip_networks"], serde_json::json!([]));
    assert!(body["ssl"].is_null());
    assert!(body["website"].is_null());
    assert_eq!(body["alerts"], serde_json::json!([]));
}
