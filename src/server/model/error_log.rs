//! Error log domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::error_log::{CreateErrorLogDto, ErrorLogDto};

/// A recorded error report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLog {
    pub error_id: String,
    pub error_message: String,
    pub error_body: Option<String>,
    pub host_ip: Option<String>,
    pub client_ip: Option<String>,
    /// Code of the user that hit the error, if known.
    pub login_id: Option<String>,
    /// `Y` once a notification mail was sent.
    pub notified_yn: String,
    pub created_at: DateTime<Utc>,
}

impl ErrorLog {
    pub fn from_entity(entity: entity::adm_error_log::Model) -> Self {
        Self {
            error_id: entity.error_id,
            error_message: entity.error_message,
            error_body: entity.error_body,
            host_ip: entity.host_ip,
            client_ip: entity.client_ip,
            login_id: entity.login_id,
            notified_yn: entity.notified_yn,
            created_at: entity.created_at,
        }
    }

    /// Converts to a DTO; display fields are left for field transformation.
    pub fn into_dto(self) -> ErrorLogDto {
        ErrorLogDto {
            error_id: self.error_id,
            error_message: self.error_message,
            error_body: self.error_body,
            host_ip: self.host_ip,
            client_ip: self.client_ip,
            login_name: self.login_id.clone(),
            login_id: self.login_id,
            notified_desc: Some(self.notified_yn.clone()),
            notified_yn: self.notified_yn,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording a new error log.
#[derive(Debug, Clone)]
pub struct CreateErrorLogParam {
    pub error_message: String,
    pub error_body: Option<String>,
    pub host_ip: Option<String>,
    pub client_ip: Option<String>,
    pub login_id: Option<String>,
}

impl CreateErrorLogParam {
    /// Builds parameters from a request body and the caller's address.
    pub fn from_dto(dto: CreateErrorLogDto, client_ip: Option<String>) -> Self {
        Self {
            error_message: dto.error_message,
            error_body: dto.error_body,
            host_ip: dto.host_ip,
            client_ip,
            login_id: dto.login_id,
        }
    }
}
