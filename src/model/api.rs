use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::return_status::{ReturnCode, ReturnStatus, ReturnStatusDto};

/// Uniform response envelope returned by every enveloped endpoint.
///
/// The return status is flattened into the top level object, so a success looks like:
///
/// ```json
/// {
///   "status": 200,
///   "statusMsg": "OK",
///   "statusDesc": null,
///   "data": { "code": "A0001", "name": "Alice" },
///   "timestamp": "2026-01-05T08:00:00Z",
///   "returnCode": "0000",
///   "returnType": "FRAME",
///   "returnDesc": "Success"
/// }
/// ```
///
/// `sqlTracer` and `restTracer` only appear when tracing is enabled for the request
/// and at least one entry was recorded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResultEntity<T> {
    /// HTTP status mirrored into the body.
    pub status: u16,
    pub status_msg: String,
    pub status_desc: Option<String>,
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub return_status: ReturnStatusDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_tracer: Option<Vec<SqlTracer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_tracer: Option<Vec<RestTracer>>,
}

impl<T> ApiResultEntity<T> {
    /// Wraps a successful payload with status 200 and `ReturnCode::Success`.
    pub fn success(data: T) -> Self {
        Self {
            status: 200,
            status_msg: "OK".to_string(),
            status_desc: None,
            data: Some(data),
            timestamp: Utc::now(),
            return_status: ReturnStatusDto::from_status(&ReturnCode::Success),
            sql_tracer: None,
            rest_tracer: None,
        }
    }

    /// Builds a payload-less envelope describing a failure.
    ///
    /// # Arguments
    /// - `status` - HTTP status code mirrored into the body
    /// - `status_msg` - Canonical reason phrase for `status`
    /// - `return_status` - Business return code describing the failure
    /// - `status_desc` - Message safe to show to the caller
    pub fn failure(
        status: u16,
        status_msg: impl Into<String>,
        return_status: &impl ReturnStatus,
        status_desc: impl Into<String>,
    ) -> Self {
        Self {
            status,
            status_msg: status_msg.into(),
            status_desc: Some(status_desc.into()),
            data: None,
            timestamp: Utc::now(),
            return_status: ReturnStatusDto::from_status(return_status),
            sql_tracer: None,
            rest_tracer: None,
        }
    }

    /// Attaches the SQL trace list, leaving the field absent when nothing was recorded.
    pub fn with_sql_tracer(mut self, tracer: Vec<SqlTracer>) -> Self {
        if !tracer.is_empty() {
            self.sql_tracer = Some(tracer);
        }
        self
    }

    /// Attaches the REST trace list, leaving the field absent when nothing was recorded.
    pub fn with_rest_tracer(mut self, tracer: Vec<RestTracer>) -> Self {
        if !tracer.is_empty() {
            self.rest_tracer = Some(tracer);
        }
        self
    }
}

/// One executed SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SqlTracer {
    pub sql: String,
    /// Bound parameter values in statement order.
    #[schema(value_type = Option<Object>)]
    pub parameter: Option<serde_json::Value>,
    /// Result of the statement (rows returned or affected).
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

/// One outbound REST exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestTracer {
    pub url: String,
    #[schema(value_type = Option<Object>)]
    pub request: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub response: Option<serde_json::Value>,
}
