use std::{num::NonZeroU32, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    middleware::{rate_limit::RateLimitPolicy, trace::TraceConfig},
    router::router,
    startup,
    state::AppState,
};

mod trace;

fn config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        rate_limit_per_second: NonZeroU32::new(100).unwrap(),
        trace_sql_enabled: false,
        trace_rest_enabled: false,
        transaction_timeout: Duration::from_secs(5),
        mail_api_url: None,
        mail_sender: "noreply@example.com".to_string(),
        mail_recipients: vec![],
    }
}

/// Builds the router over a fresh schema with the given policy and trace switches.
async fn app(policy: RateLimitPolicy, trace: TraceConfig) -> (TestContext, Router) {
    let test = TestBuilder::new().with_adm_tables().build().await.unwrap();
    let db: DatabaseConnection = test.db.clone().unwrap();

    let mut state: AppState = startup::build_state(&config(), db).unwrap();
    state.rate_limit_policy = policy;
    state.trace_config = trace;

    (test, router(state))
}

async fn default_app() -> (TestContext, Router) {
    app(
        RateLimitPolicy::per_second(NonZeroU32::new(100).unwrap()),
        TraceConfig::default(),
    )
    .await
}

/// Sends one request and returns the status with the decoded JSON body.
async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send_raw(router, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

async fn send_raw(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, bytes.to_vec())
}
