//! Route contract, driven through the router without a socket.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use redblue_core::CounterState;
use redblue_server::app_state::AppState;
use redblue_server::router::build_router;
use redblue_server::store::MemoryStore;

struct Harness {
    app: Router,
    state: AppState,
    store: Arc<MemoryStore>,
}

impl Harness {
    async fn new(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        let state = AppState::bootstrap(store.clone()).await;
        Self {
            app: build_router(state.clone()),
            state,
            store,
        }
    }

    async fn call(&self, method: Method, uri: &str) -> (StatusCode, HeaderMap, String) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let res = self.app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn body_of(&self, method: Method, uri: &str) -> serde_json::Value {
        let (status, _, body) = self.call(method, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}: {body}");
        serde_json::from_str(&body).unwrap()
    }
}

fn assert_common_headers(headers: &HeaderMap) {
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, PUT, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let allow: Vec<_> = headers.get_all(header::ALLOW).iter().collect();
    assert_eq!(allow, ["GET, PUT, OPTIONS"]);
}

#[tokio::test]
async fn fresh_status_is_zero() {
    let h = Harness::new(MemoryStore::new()).await;
    let (status, headers, body) = h.call(Method::GET, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"red":0,"blue":0}"#);
    assert_common_headers(&headers);
}

#[tokio::test]
async fn single_counter_reads() {
    let h = Harness::new(MemoryStore::with_content(r#"{"red":3,"blue":9}"#)).await;
    let (_, _, red) = h.call(Method::GET, "/red").await;
    assert_eq!(red, r#"{"red":3}"#);
    let (_, _, blue) = h.call(Method::GET, "/blue").await;
    assert_eq!(blue, r#"{"blue":9}"#);
}

#[tokio::test]
async fn put_red_increments_by_one() {
    let h = Harness::new(MemoryStore::with_content(r#"{"red":41,"blue":0}"#)).await;
    let before = h.body_of(Method::GET, "/red").await["red"].as_u64().unwrap();

    let (status, headers, body) = h.call(Method::PUT, "/red").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"red":42}"#);
    assert_common_headers(&headers);

    let after = h.body_of(Method::GET, "/red").await["red"].as_u64().unwrap();
    assert_eq!(after, before + 1);
}

#[tokio::test]
async fn ten_blue_increments() {
    let h = Harness::new(MemoryStore::with_content(r#"{"red":0,"blue":5}"#)).await;
    for _ in 0..10 {
        h.call(Method::PUT, "/blue").await;
    }
    let blue = h.body_of(Method::GET, "/blue").await;
    assert_eq!(blue, serde_json::json!({ "blue": 15 }));
    let all = h.body_of(Method::GET, "/status").await;
    assert_eq!(all, serde_json::json!({ "red": 0, "blue": 15 }));
}

#[tokio::test]
async fn unknown_routes_are_404() {
    let h = Harness::new(MemoryStore::new()).await;
    for (method, uri) in [
        (Method::GET, "/unknown"),
        (Method::PUT, "/unknown"),
        (Method::PUT, "/status"),
        (Method::GET, "/red/"),
        (Method::GET, "/"),
        (Method::POST, "/red"),
        (Method::DELETE, "/blue"),
        (Method::PATCH, "/status"),
        (Method::HEAD, "/red"),
    ] {
        let (status, headers, body) = h.call(method.clone(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        if method != Method::HEAD {
            assert_eq!(body, r#"{"error":"page not found"}"#, "{method} {uri}");
        }
        assert_common_headers(&headers);
    }
}

#[tokio::test]
async fn unknown_put_does_not_persist() {
    let h = Harness::new(MemoryStore::new()).await;
    h.call(Method::PUT, "/unknown").await;
    h.call(Method::PUT, "/status").await;
    h.state.persister().flush().await.unwrap();
    assert_eq!(h.store.save_count(), 0);
    assert_eq!(h.state.snapshot(), CounterState::default());
}

#[tokio::test]
async fn options_is_preflight_everywhere() {
    let h = Harness::new(MemoryStore::new()).await;
    for uri in ["/red", "/status", "/anything/at/all"] {
        let (status, headers, body) = h.call(Method::OPTIONS, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.is_empty(), "{uri}");
        assert_common_headers(&headers);
    }
    h.state.persister().flush().await.unwrap();
    assert_eq!(h.store.save_count(), 0);
}

#[tokio::test]
async fn query_string_does_not_change_routing() {
    let h = Harness::new(MemoryStore::new()).await;
    let (status, _, body) = h.call(Method::GET, "/red?cache=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"red":0}"#);
}

#[tokio::test]
async fn put_is_persisted_and_reloads() {
    let store = MemoryStore::new();
    let h = Harness::new(store).await;
    h.call(Method::PUT, "/red").await;
    h.call(Method::PUT, "/blue").await;
    h.call(Method::PUT, "/blue").await;

    h.state.persister().flush().await.unwrap();
    assert_eq!(h.store.saved(), Some(CounterState::new(1, 2)));

    let restarted = AppState::bootstrap(h.store.clone()).await;
    assert_eq!(restarted.snapshot(), CounterState::new(1, 2));
}

#[tokio::test]
async fn persist_failure_is_invisible_to_the_client() {
    let store = MemoryStore::new();
    store.fail_saves(true);
    let h = Harness::new(store).await;

    let (status, _, body) = h.call(Method::PUT, "/red").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"red":1}"#);

    h.state.persister().flush().await.unwrap();
    assert!(h.store.raw().is_none());
    assert_eq!(h.state.snapshot(), CounterState::new(1, 0));
}

#[tokio::test]
async fn malformed_store_starts_from_zero() {
    for content in [r#"{"red":"many"}"#, "[4,5]", r#"{"red":1.5}"#] {
        let h = Harness::new(MemoryStore::with_content(content)).await;
        let (status, _, body) = h.call(Method::GET, "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"red":0,"blue":0}"#, "{content}");
    }
}

#[tokio::test]
async fn allow_never_advertises_head() {
    let h = Harness::new(MemoryStore::new()).await;
    for (method, uri) in [
        (Method::OPTIONS, "/red"),
        (Method::OPTIONS, "/status"),
        (Method::POST, "/blue"),
        (Method::PUT, "/status"),
        (Method::GET, "/red"),
    ] {
        let (_, headers, _) = h.call(method.clone(), uri).await;
        for value in headers.get_all(header::ALLOW) {
            assert!(!value.to_str().unwrap().contains("HEAD"), "{method} {uri}");
        }
    }
}
