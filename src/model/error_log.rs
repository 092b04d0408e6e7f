use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error log as returned to API callers.
///
/// `login_name` and `notified_desc` are display fields filled in by field
/// transformation from `login_id` and `notified_yn` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLogDto {
    pub error_id: String,
    pub error_message: String,
    pub error_body: Option<String>,
    pub host_ip: Option<String>,
    pub client_ip: Option<String>,
    pub login_id: Option<String>,
    pub login_name: Option<String>,
    pub notified_yn: String,
    pub notified_desc: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateErrorLogDto {
    pub error_message: String,
    pub error_body: Option<String>,
    pub host_ip: Option<String>,
    pub login_id: Option<String>,
}
