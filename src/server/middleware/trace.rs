//! Per-request collection of SQL and outbound REST traces.
//!
//! The `trace_context` middleware inserts a fresh [`TraceContext`] into the request
//! extensions. Repositories and REST clients built for the request record into it,
//! and controllers attach the collected lists to the response envelope. Error
//! envelopes get them attached here, once the handler has returned. Each list is
//! only collected when its switch is enabled in configuration.

use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::Statement;

use crate::{
    model::api::{ApiResultEntity, RestTracer, SqlTracer},
    server::error::FailureEnvelope,
};

/// Which trace lists are collected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceConfig {
    pub sql_enabled: bool,
    pub rest_enabled: bool,
}

/// Request-scoped trace sink.
///
/// Cloning shares the underlying lists. A disabled list is `None` and recording
/// into it is a no-op.
#[derive(Debug, Clone, Default)]
pub struct TraceContext {
    sql: Option<Arc<Mutex<Vec<SqlTracer>>>>,
    rest: Option<Arc<Mutex<Vec<RestTracer>>>>,
}

impl TraceContext {
    pub fn new(config: TraceConfig) -> Self {
        Self {
            sql: config.sql_enabled.then(Default::default),
            rest: config.rest_enabled.then(Default::default),
        }
    }

    /// A context that records nothing, used outside of HTTP requests.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn sql_enabled(&self) -> bool {
        self.sql.is_some()
    }

    pub fn rest_enabled(&self) -> bool {
        self.rest.is_some()
    }

    pub fn record_sql(&self, tracer: SqlTracer) {
        if let Some(sql) = &self.sql {
            sql.lock().unwrap_or_else(PoisonError::into_inner).push(tracer);
        }
    }

    pub fn record_rest(&self, tracer: RestTracer) {
        if let Some(rest) = &self.rest {
            rest.lock().unwrap_or_else(PoisonError::into_inner).push(tracer);
        }
    }

    /// Copies every recorded trace onto the envelope.
    ///
    /// Lists that are disabled or empty stay absent from the serialized body.
    pub fn attach<T>(&self, entity: ApiResultEntity<T>) -> ApiResultEntity<T> {
        entity
            .with_sql_tracer(snapshot(&self.sql))
            .with_rest_tracer(snapshot(&self.rest))
    }
}

fn snapshot<T: Clone>(list: &Option<Arc<Mutex<Vec<T>>>>) -> Vec<T> {
    list.as_ref()
        .map(|list| list.lock().unwrap_or_else(PoisonError::into_inner).clone())
        .unwrap_or_default()
}

/// Builds a trace record from a statement and the outcome it produced.
pub fn sql_tracer(statement: Statement, data: serde_json::Value) -> SqlTracer {
    let parameter = statement.values.map(|values| {
        serde_json::Value::Array(
            values
                .0
                .iter()
                .map(|value| serde_json::Value::String(format!("{:?}", value)))
                .collect(),
        )
    });

    SqlTracer {
        sql: statement.sql,
        parameter,
        data: Some(data),
    }
}

/// Installs a fresh [`TraceContext`] for each request.
///
/// Error responses are rendered again with the traces recorded before the
/// failure.
pub async fn trace_context(
    State(config): State<TraceConfig>,
    mut request: Request,
    next: Next,
) -> Response {
    let trace = TraceContext::new(config);
    request.extensions_mut().insert(trace.clone());

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<FailureEnvelope>() {
        Some(FailureEnvelope(envelope)) => {
            (response.status(), Json(trace.attach(envelope))).into_response()
        }
        None => response,
    }
}
