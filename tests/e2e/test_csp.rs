use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_csp_reports(ctx: &TestContext) {
    let report = br#"{"csp-report":{"document-uri":"http://localhost/v4/","violated-directive":"script-src"}}"#;

    let response = ctx
        .client
        .post_raw("/report-violation", "application/csp-report", report)
        .await
        .unwrap();

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.body_bytes.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_reports_with_json_content_type(ctx: &TestContext) {
    let response = ctx
        .client
        .post_raw("/report-violation", "application/json", br#"{"csp-report":{}}"#)
        .await
        .unwrap();

    response.assert_status(StatusCode::NO_CONTENT);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_empty_reports(ctx: &TestContext) {
    let response = ctx
        .client
        .post_raw("/report-violation", "application/json", b"")
        .await
        .unwrap();

    response.assert_status(StatusCode::NO_CONTENT);
}
