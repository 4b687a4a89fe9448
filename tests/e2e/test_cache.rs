use crate::e2e::helpers;

use futures::future::join_all;
use helpers::fixtures::{MISSING_FEED_PATH, PODCAST_FEED_PATH};
use helpers::{TestContext, UnreachableStore};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fetch_feed_once_within_ttl(ctx: &TestContext) {
    let path = ctx.feed_path("v4", PODCAST_FEED_PATH, "");

    let first = ctx.client.get(&path).await.unwrap();
    let second = ctx.client.get(&path).await.unwrap();

    first.assert_status(StatusCode::OK);
    second.assert_status(StatusCode::OK);
    assert_eq!(first.body_bytes, second.body_bytes);
    assert_eq!(first.header("content-type"), second.header("content-type"));
    assert_eq!(ctx.upstream.hits.feeds(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_cache_json_and_html_separately(ctx: &TestContext) {
    let html = ctx.feed_path("v4", PODCAST_FEED_PATH, "");
    let json = ctx.feed_path("v4", PODCAST_FEED_PATH, "&json=1");

    ctx.client.get(&html).await.unwrap();
    let json_response = ctx.client.get(&json).await.unwrap();
    ctx.client.get(&json).await.unwrap();

    assert!(json_response.body.is_some());
    assert_eq!(ctx.upstream.hits.feeds(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_key_by_layout(ctx: &TestContext) {
    ctx.client
        .get(&ctx.feed_path("v3", PODCAST_FEED_PATH, ""))
        .await
        .unwrap();
    let v4 = ctx
        .client
        .get(&ctx.feed_path("v4", PODCAST_FEED_PATH, ""))
        .await
        .unwrap();

    v4.assert_contains("data-layout=\"v4\"");
    assert_eq!(ctx.upstream.hits.feeds(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_cache_failures(ctx: &TestContext) {
    let path = ctx.feed_path("v4", MISSING_FEED_PATH, "");

    ctx.client
        .get(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST);
    ctx.client
        .get(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(ctx.upstream.hits.feeds(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_search_once_within_ttl(ctx: &TestContext) {
    let first = ctx.client.get("/v4/search?term=rust").await.unwrap();
    let second = ctx.client.get("/v4/search?term=rust").await.unwrap();

    assert_eq!(first.body_bytes, second.body_bytes);
    assert_eq!(ctx.upstream.hits.searches(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_concurrent_requests(ctx: &TestContext) {
    let path = ctx.feed_path("v4", PODCAST_FEED_PATH, "");

    let responses = join_all((0..8).map(|_| ctx.client.get(&path))).await;

    for response in &responses {
        response.as_ref().unwrap().assert_status(StatusCode::OK);
    }
    // Racing misses may each fetch; later requests are served from cache
    assert!(ctx.upstream.hits.feeds() >= 1);

    ctx.client.get(&path).await.unwrap();
    let settled = ctx.upstream.hits.feeds();
    ctx.client.get(&path).await.unwrap();
    assert_eq!(ctx.upstream.hits.feeds(), settled);
}

#[tokio::test]
async fn it_should_serve_requests_when_cache_is_down() {
    let ctx = TestContext::with_cache_store(Some(Arc::new(UnreachableStore))).await;
    let path = ctx.feed_path("v4", PODCAST_FEED_PATH, "");

    let first = ctx.client.get(&path).await.unwrap();
    let second = ctx.client.get(&path).await.unwrap();

    first
        .assert_status(StatusCode::OK)
        .assert_contains("Ferris Talks");
    second.assert_status(StatusCode::OK);
    assert_eq!(ctx.upstream.hits.feeds(), 2);
}

#[tokio::test]
async fn it_should_fetch_every_time_when_cache_is_disabled() {
    let ctx = TestContext::with_cache_store(None).await;
    let path = ctx.feed_path("v4", PODCAST_FEED_PATH, "");

    ctx.client.get(&path).await.unwrap();
    ctx.client.get(&path).await.unwrap();

    assert_eq!(ctx.upstream.hits.feeds(), 2);
}
