use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_redirect_root_to_default_layout(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();

    response
        .assert_status(StatusCode::FOUND)
        .assert_header("location", "/v4/");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_redirect_root_regardless_of_query(ctx: &TestContext) {
    let response = ctx.client.get("/?url=http://example.com/feed.xml").await.unwrap();

    response
        .assert_status(StatusCode::FOUND)
        .assert_header("location", "/v4/");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_render_index_for_each_layout(ctx: &TestContext) {
    for version in ["v1", "v2", "v3", "v4"] {
        let response = ctx.client.get(&format!("/{}/", version)).await.unwrap();

        response
            .assert_status(StatusCode::OK)
            .assert_contains(&format!("data-layout=\"{}\"", version))
            .assert_contains("id=\"search-form\"");
        assert!(response
            .header("content-type")
            .is_some_and(|ct| ct.starts_with("text/html")));
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_render_index_without_trailing_slash(ctx: &TestContext) {
    let response = ctx.client.get("/v2").await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_contains("data-layout=\"v2\"");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_layout(ctx: &TestContext) {
    let response = ctx.client.get("/v9/").await.unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Unknown layout v9");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_cache_in_ready_status(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(body.get("cache").and_then(|v| v.as_str()), Some("connected"));
    assert_eq!(body.get("store").and_then(|v| v.as_str()), Some("memory"));
}

#[tokio::test]
async fn it_should_report_disabled_cache_as_ready() {
    let ctx = TestContext::with_cache_store(None).await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("cache").and_then(|v| v.as_str()), Some("disabled"));
}

#[tokio::test]
async fn it_should_not_be_ready_when_cache_is_unreachable() {
    let ctx = TestContext::with_cache_store(Some(std::sync::Arc::new(helpers::UnreachableStore)))
        .await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("cache").and_then(|v| v.as_str()),
        Some("disconnected")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_security_headers(ctx: &TestContext) {
    let response = ctx.client.get("/v4/").await.unwrap();

    response
        .assert_header("x-content-type-options", "nosniff")
        .assert_header("x-frame-options", "SAMEORIGIN")
        .assert_header("x-dns-prefetch-control", "off")
        .assert_header("x-download-options", "noopen")
        .assert_header("x-xss-protection", "1; mode=block")
        .assert_header(
            "strict-transport-security",
            "max-age=15552000; includeSubDomains",
        );

    let csp = response.header("content-security-policy").unwrap();
    assert!(csp.contains("default-src 'self' http: https:"));
    assert!(csp.contains("report-uri /report-violation"));
    assert_eq!(response.header("x-webkit-csp"), Some(csp));
    assert_eq!(response.header("x-content-security-policy"), Some(csp));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id(ctx: &TestContext) {
    let first = ctx.client.get("/health").await.unwrap();
    let second = ctx.client.get("/health").await.unwrap();

    first.assert_header_exists("x-request-id");
    second.assert_header_exists("x-request-id");
    assert_ne!(first.header("x-request-id"), second.header("x-request-id"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_static_files_with_cache_control(ctx: &TestContext) {
    let response = ctx.client.get("/static/css/site.css").await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("cache-control", "public, max-age=86400");
    assert!(response
        .header("content-type")
        .is_some_and(|ct| ct.starts_with("text/css")));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_missing_static_file(ctx: &TestContext) {
    let response = ctx.client.get("/static/nope.js").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}
