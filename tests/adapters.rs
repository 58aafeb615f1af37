//! Adapter-level integration tests against mock HTTP upstreams.
//!
//! These exercise the registration, geolocation and site adapters end to end
//! over a local `httptest` server — no real network access.

use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};

use domainscope::config::endpoints::RdapRoutes;
use domainscope::models::DateField;
use domainscope::{netinfo, registration, site};

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .expect("client should build")
}

const TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::test]
async fn registration_adapter_normalizes_structured_rdap() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/rdap/example.com")).respond_with(
            json_encoded(serde_json::json!({
                "entities": [{
                    "roles": ["registrar"],
                    "vcardArray": ["vcard", [["fn", {}, "text", "GoDaddy.com, LLC"]]]
                }],
                "events": [
                    { "eventAction": "registration", "eventDate": "2019-05-02T08:00:00Z" },
                    { "eventAction": "expiration", "eventDate": "2027-05-02T08:00:00Z" }
                ],
                "status": ["client transfer prohibited"]
            })),
        ),
    );

    let routes = RdapRoutes::single(&format!("http://{}/rdap", server.addr()));
    let record =
        registration::fetch_registration(&client(), &routes, "example.com", TIMEOUT).await;

    assert_eq!(record.registrar.as_deref(), Some("GoDaddy.com, LLC"));
    assert_eq!(
        record.created.known(),
        chrono::NaiveDate::from_ymd_opt(2019, 5, 2)
    );
    assert_eq!(record.status, vec!["client transfer prohibited"]);
}

#[tokio::test]
async fn registration_adapter_parses_legacy_text() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/rdap/example.vn")).respond_with(
            status_code(200).body(
                "Registrar Name: P.A. Viet Nam Company Limited\nExpiry Date: 2026-01-05\nStatus: ok\n",
            ),
        ),
    );

    let routes = RdapRoutes::single(&format!("http://{}/rdap", server.addr()));
    let record = registration::fetch_registration(&client(), &routes, "example.vn", TIMEOUT).await;

    assert_eq!(
        record.registrar.as_deref(),
        Some("P.A. Viet Nam Company Limited")
    );
    assert_eq!(
        record.expires.known(),
        chrono::NaiveDate::from_ymd_opt(2026, 1, 5)
    );
}

#[tokio::test]
async fn registration_adapter_downgrades_errors_to_absent_record() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/rdap/missing.zz"))
            .respond_with(status_code(404)),
    );

    let routes = RdapRoutes::single(&format!("http://{}/rdap", server.addr()));
    let record = registration::fetch_registration(&client(), &routes, "missing.zz", TIMEOUT).await;

    // Absence is data: a full default record, not an error.
    assert_eq!(record.registrar, None);
    assert_eq!(record.created, DateField::Unknown);
    assert_eq!(record.expires, DateField::Unknown);
    assert!(record.status.is_empty());
}

#[tokio::test]
async fn geolocation_adapter_classifies_organization() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/192.0.2.10/json")).respond_with(
            json_encoded(serde_json::json!({
                "org": "AS16509 Amazon.com, Inc.",
                "country": "US",
                "region": "Virginia",
                "city": "Ashburn"
            })),
        ),
    );

    let base = format!("http://{}", server.addr());
    let info = netinfo::lookup_network(&client(), &base, "192.0.2.10", TIMEOUT).await;

    assert_eq!(info.ip, "192.0.2.10");
    assert_eq!(info.asn.as_deref(), Some("AS16509 Amazon.com, Inc."));
    assert_eq!(info.provider.as_deref(), Some("AWS"));
    assert_eq!(info.country.as_deref(), Some("US"));
}

#[tokio::test]
async fn geolocation_adapter_failure_leaves_provider_absent() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/192.0.2.99/json"))
            .respond_with(status_code(503)),
    );

    let base = format!("http://{}", server.addr());
    let info = netinfo::lookup_network(&client(), &base, "192.0.2.99", TIMEOUT).await;

    assert_eq!(info.ip, "192.0.2.99");
    assert_eq!(info.asn, None);
    // Absent, not "Other": a failed lookup must never feed the mismatch rule.
    assert_eq!(info.provider, None);
}

#[tokio::test]
async fn geolocation_adapter_success_without_org_is_other() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/192.0.2.50/json"))
            .respond_with(json_encoded(serde_json::json!({ "country": "VN" }))),
    );

    let base = format!("http://{}", server.addr());
    let info = netinfo::lookup_network(&client(), &base, "192.0.2.50", TIMEOUT).await;

    assert_eq!(info.provider.as_deref(), Some("Other"));
}

#[tokio::test]
async fn site_adapter_profiles_headers_and_body() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200)
                .append_header("Server", "nginx/1.24.0")
                .append_header("Strict-Transport-Security", "max-age=63072000")
                .append_header("X-Content-Type-Options", "nosniff")
                .body(r#"<link href="/wp-content/themes/x/style.css">"#),
        ),
    );

    let url = server.url_str("/");
    let profile = site::fetch_site_profile(&client(), &url, TIMEOUT)
        .await
        .expect("profile should be present");

    assert_eq!(profile.status, 200);
    assert_eq!(profile.server.as_deref(), Some("nginx/1.24.0"));
    assert!(profile.technologies.contains("WordPress"));
    assert!(profile.technologies.contains("Nginx"));
    assert!(profile.hsts);
    assert!(profile.content_type_options);
    assert!(!profile.csp);
    assert!(!profile.frame_options);
    // 100 - 5 (CSP) - 5 (frame options)
    assert_eq!(profile.score, 90);
    // Mock server speaks plain HTTP.
    assert!(!profile.https);
}

#[tokio::test]
async fn site_adapter_unreachable_host_is_absent() {
    // Nothing listens on this port; connection is refused immediately.
    let profile =
        site::fetch_site_profile(&client(), "http://127.0.0.1:9/", TIMEOUT).await;
    assert!(profile.is_none());
}
