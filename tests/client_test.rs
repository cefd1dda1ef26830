//! Integration tests driving the client against a local HTTP server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use freljord::api::champion::ChampionList;
use freljord::ratelimit::LimitType;
use freljord::{Client, Error};

/// Bind a test server on an ephemeral port and return a base URL for it.
///
/// Also installs a subscriber honoring `RUST_LOG` so dispatcher traces are
/// visible when a test needs debugging.
async fn serve(router: Router) -> String {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/", addr)
}

fn client_for(base_url: &str) -> Client {
    Client::builder()
        .api_key("RGAPI-test")
        .base_url(base_url)
        .build()
        .unwrap()
}

fn rate_limit_headers(app_count: &str, method_count: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("X-App-Rate-Limit", "100:1,1000:120".parse().unwrap());
    headers.insert("X-App-Rate-Limit-Count", app_count.parse().unwrap());
    headers.insert("X-Method-Rate-Limit", "10:1".parse().unwrap());
    headers.insert("X-Method-Rate-Limit-Count", method_count.parse().unwrap());
    headers
}

#[tokio::test]
async fn decodes_response_body() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/lol/summoner/v3/summoners/by-name/:name",
        get(|| async {
            r#"{
                "profileIconId": 1234,
                "name": "Test Summoner",
                "summonerLevel": 30,
                "revisionDate": 1500000000000,
                "id": 111,
                "accountId": 222
            }"#
        }),
    );
    let client = client_for(&serve(router).await);

    let response = client.summoner().by_name("Test Summoner").await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data.name, "Test Summoner");
    assert_eq!(response.data.summoner_level, 30);
    assert_eq!(response.data.id, 111);
    assert_eq!(response.data.account_id, 222);
    Ok(())
}

#[tokio::test]
async fn api_key_header_attached_to_requests() {
    let router = Router::new().route(
        "/lol/status/v3/shard-data",
        get(|headers: HeaderMap| async move {
            if headers.get("X-Riot-Token").map(|v| v.as_bytes()) == Some(b"RGAPI-test") {
                (StatusCode::OK, "{}")
            } else {
                (StatusCode::UNAUTHORIZED, "{}")
            }
        }),
    );
    let client = client_for(&serve(router).await);

    let response = client.status().shard_data().await.unwrap();

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn http_error_status_is_surfaced() {
    let router = Router::new().route(
        "/lol/platform/v3/champions",
        get(|| async { (StatusCode::BAD_REQUEST, "Bad Request") }),
    );
    let client = client_for(&serve(router).await);

    let result = client.champion().all().await;

    assert!(
        matches!(result, Err(Error::Status { status }) if status == StatusCode::BAD_REQUEST),
        "expected status error, got {:?}",
        result
    );
}

#[tokio::test]
async fn rate_state_recorded_even_on_error_status() {
    let router = Router::new().route(
        "/lol/platform/v3/champions",
        get(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                rate_limit_headers("42:1", "10:1"),
                "",
            )
        }),
    );
    let client = client_for(&serve(router).await);

    let result = client.champion().all().await;
    assert!(matches!(result, Err(Error::Status { .. })));

    // Headers reflect server-side truth even on failure, so the registry
    // must hold them.
    assert_eq!(client.app_rate().counts[&1].used, 42);
    assert_eq!(client.rate("GET_getAllChampions").counts[&1].used, 10);
}

#[tokio::test]
async fn gate_denies_locally_once_quota_is_exhausted() -> anyhow::Result<()> {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = hits.clone();
    let router = Router::new().route(
        "/lol/platform/v3/champions",
        get(move || {
            let hits = handler_hits.clone();
            async move {
                let hit = hits.fetch_add(1, Ordering::SeqCst) + 1;
                // First response leaves headroom, second reports the method
                // quota fully used.
                let method_count = if hit == 1 { "9:1" } else { "10:1" };
                (
                    rate_limit_headers("1:1", method_count),
                    r#"{"champions":[]}"#,
                )
            }
        }),
    );
    let client = client_for(&serve(router).await);

    // 9/10 used: the next call must still be admitted.
    client.champion().all().await?;
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // 10/10 used after this response.
    client.champion().all().await?;
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    // Predicted rejection: refused locally, no request hits the server.
    let result = client.champion().all().await;
    match result {
        Err(Error::QuotaExceeded {
            key,
            window_secs,
            used,
            allowed,
        }) => {
            assert_eq!(key, "GET_getAllChampions");
            assert_eq!(window_secs, 1);
            assert_eq!(used, 10);
            assert_eq!(allowed, 10);
        }
        other => panic!("expected quota error, got {:?}", other),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn quota_for_one_method_does_not_block_another() -> anyhow::Result<()> {
    let champion_router = Router::new().route(
        "/lol/platform/v3/champions",
        get(|| async { (rate_limit_headers("1:1", "10:1"), r#"{"champions":[]}"#) }),
    );
    let status_router = Router::new().route(
        "/lol/status/v3/shard-data",
        get(|| async { (rate_limit_headers("2:1", "1:1"), "{}") }),
    );
    let client = client_for(&serve(champion_router.merge(status_router)).await);

    client.champion().all().await?;

    // The champion method is exhausted, but shard data has its own bucket.
    assert!(matches!(
        client.champion().all().await,
        Err(Error::QuotaExceeded { .. })
    ));
    client.status().shard_data().await?;
    Ok(())
}

#[tokio::test]
async fn transport_failure_leaves_registry_untouched() {
    // Nothing listens on port 9; the connection itself fails, so no
    // response headers exist to record.
    let client = client_for("http://127.0.0.1:9/");

    let result = client.champion().all().await;

    assert!(matches!(result, Err(Error::Transport(_))));
    assert!(client.app_rate().is_empty());
    assert!(client.rate("GET_getAllChampions").is_empty());
}

#[tokio::test]
async fn empty_body_decodes_to_default() -> anyhow::Result<()> {
    let router = Router::new().route("/lol/platform/v3/champions", get(|| async { "" }));
    let client = client_for(&serve(router).await);

    let response = client.champion().all().await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data, ChampionList::default());
    Ok(())
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let router = Router::new().route(
        "/lol/platform/v3/champions",
        get(|| async { "this is not json" }),
    );
    let client = client_for(&serve(router).await);

    let result = client.champion().all().await;

    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn malformed_rate_headers_do_not_fail_the_call() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/lol/platform/v3/champions",
        get(|| async {
            let mut headers = HeaderMap::new();
            headers.insert("X-App-Rate-Limit", "not-a-rate".parse().unwrap());
            headers.insert("X-Method-Rate-Limit-Count", "::,,".parse().unwrap());
            (headers, r#"{"champions":[]}"#)
        }),
    );
    let client = client_for(&serve(router).await);

    let response = client.champion().all().await?;

    assert_eq!(response.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn advisory_headers_are_exposed_but_not_acted_on() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/lol/status/v3/shard-data",
        get(|| async {
            let mut headers = HeaderMap::new();
            headers.insert("X-Rate-Limit-Type", "application".parse().unwrap());
            headers.insert("Retry-After", "5".parse().unwrap());
            (headers, "{}")
        }),
    );
    let client = client_for(&serve(router).await);

    assert!(client.last_advisory().is_none());
    client.status().shard_data().await?;

    let advisory = client.last_advisory().expect("advisory recorded");
    assert_eq!(advisory.limit_type, Some(LimitType::Application));
    assert_eq!(advisory.retry_after, Some(Duration::from_secs(5)));

    // Advisory state never blocks dispatch.
    client.status().shard_data().await?;
    Ok(())
}

#[tokio::test]
async fn concurrent_callers_share_rate_state() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/lol/status/v3/shard-data",
        get(|| async { (rate_limit_headers("3:1", "3:1"), "{}") }),
    );
    let client = client_for(&serve(router).await);

    let calls = (0..4).map(|_| {
        let client = client.clone();
        async move { client.status().shard_data().await }
    });
    for result in futures::future::join_all(calls).await {
        result?;
    }

    // Clones share one registry; the last completed response won.
    assert_eq!(client.app_rate().counts[&1].used, 3);
    assert_eq!(client.rate("GET_getShardData").counts[&1].used, 3);
    Ok(())
}
