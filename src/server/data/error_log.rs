//! Error log repository.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::server::{
    data::base::{BaseRepository, CodeEntity},
    middleware::trace::TraceContext,
    model::error_log::{CreateErrorLogParam, ErrorLog},
};

impl CodeEntity for entity::adm_error_log::Entity {
    fn code_column() -> Self::Column {
        entity::adm_error_log::Column::ErrorId
    }

    fn code_of(model: &Self::Model) -> &str {
        &model.error_id
    }
}

pub struct ErrorLogRepository<'a, C = DatabaseConnection> {
    base: BaseRepository<'a, entity::adm_error_log::Entity, C>,
}

impl<'a, C: ConnectionTrait> ErrorLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Records executed statements into `trace`.
    pub fn traced(self, trace: TraceContext) -> Self {
        Self {
            base: self.base.traced(trace),
        }
    }

    /// Inserts a new, not yet notified, error log under `error_id`.
    ///
    /// # Arguments
    /// - `error_id` - Serial code allocated for the log
    /// - `param` - Error details
    ///
    /// # Returns
    /// - `Ok(ErrorLog)` - The stored log
    /// - `Err(DbErr)` - Database error, including a duplicate error id
    pub async fn create(&self, error_id: String, param: CreateErrorLogParam) -> Result<ErrorLog, DbErr> {
        let model = self
            .base
            .insert(entity::adm_error_log::Model {
                error_id,
                error_message: param.error_message,
                error_body: param.error_body,
                host_ip: param.host_ip,
                client_ip: param.client_ip,
                login_id: param.login_id,
                notified_yn: "N".to_string(),
                created_at: Utc::now(),
            })
            .await?;

        Ok(ErrorLog::from_entity(model))
    }

    pub async fn find_by_id(&self, error_id: &str) -> Result<Option<ErrorLog>, DbErr> {
        Ok(self
            .base
            .find_by_id(error_id)
            .await?
            .map(ErrorLog::from_entity))
    }

    /// Flags the log as notified.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows affected, `0` when the log does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_notified(&self, error_id: &str) -> Result<u64, DbErr> {
        self.base
            .update_column(
                error_id,
                entity::adm_error_log::Column::NotifiedYn,
                "Y".into(),
            )
            .await
    }
}
