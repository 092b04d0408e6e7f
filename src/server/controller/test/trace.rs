use super::*;
use serde_json::json;
use test_utils::factory;

async fn sql_traced_app() -> (TestContext, Router) {
    app(
        RateLimitPolicy::per_second(NonZeroU32::new(100).unwrap()),
        TraceConfig {
            sql_enabled: true,
            rest_enabled: false,
        },
    )
    .await
}

fn traced_statements(body: &serde_json::Value) -> Vec<String> {
    body["sqlTracer"]
        .as_array()
        .map(|tracers| {
            tracers
                .iter()
                .filter_map(|tracer| tracer["sql"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Expected: no tracer fields when tracing is disabled
#[tokio::test]
async fn omits_tracers_when_disabled() {
    let (_test, router) = default_app().await;

    let (_, body) = send(&router, Method::GET, "/adm/admUsers?admUserName=alice", None).await;

    assert!(body.get("sqlTracer").is_none());
    assert!(body.get("restTracer").is_none());
}

/// Expected: the executed query is attached when SQL tracing is enabled
#[tokio::test]
async fn attaches_sql_tracer_when_enabled() {
    let (_test, router) = sql_traced_app().await;

    let (_, body) = send(&router, Method::GET, "/adm/admUsers?admUserName=alice", None).await;

    let tracers = body["sqlTracer"].as_array().unwrap();
    assert_eq!(tracers.len(), 1);
    assert!(tracers[0]["sql"]
        .as_str()
        .unwrap()
        .contains("adm_user"));
    assert!(body.get("restTracer").is_none());
}

/// Expected: the serial allocation, the insert and the login lookup are all traced
#[tokio::test]
async fn traces_every_statement_of_error_recording() {
    let (test, router) = sql_traced_app().await;
    factory::adm_user::AdmUserFactory::new(test.db.as_ref().unwrap())
        .code("U001")
        .name("alice")
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        &router,
        Method::POST,
        "/adm/errorLog",
        Some(json!({ "errorMessage": "boom", "loginId": "U001" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["loginName"], "alice");

    let statements = traced_statements(&body);
    assert_eq!(statements.len(), 3);
    assert!(statements[0].starts_with("INSERT INTO \"serial_no\""));
    assert!(statements[1].starts_with("INSERT INTO \"adm_error_log\""));
    assert!(statements[2].contains("FROM \"adm_user\""));
}

/// Expected: a failed lookup still carries the statements that ran
#[tokio::test]
async fn attaches_sql_tracer_to_error_envelope() {
    let (_test, router) = sql_traced_app().await;

    let (status, body) = send(&router, Method::GET, "/adm/admUser?admUserCode=U999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["returnCode"], "9999");
    let statements = traced_statements(&body);
    assert_eq!(statements.len(), 1);
    assert!(statements[0].contains("FROM \"adm_user\""));
}

/// Expected: validation failures before any query carry no tracer
#[tokio::test]
async fn error_envelope_without_statements_omits_tracer() {
    let (_test, router) = sql_traced_app().await;

    let (status, body) = send(&router, Method::GET, "/adm/admUser?admUserCode=U%20001", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("sqlTracer").is_none());
}
