//! Error log factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test error logs.
///
/// Defaults to an un-notified log with no body, host or login id.
pub struct ErrorLogFactory<'a> {
    db: &'a DatabaseConnection,
    error_id: String,
    error_message: String,
    login_id: Option<String>,
    notified_yn: String,
}

impl<'a> ErrorLogFactory<'a> {
    /// Creates a new ErrorLogFactory with default values.
    ///
    /// Defaults:
    /// - error_id: `"T{id}"` where id is auto-incremented
    /// - error_message: `"Error {id}"`
    /// - notified_yn: `"N"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            error_id: format!("T{:010}", id),
            error_message: format!("Error {}", id),
            login_id: None,
            notified_yn: "N".to_string(),
        }
    }

    /// Sets the error id.
    pub fn error_id(mut self, error_id: impl Into<String>) -> Self {
        self.error_id = error_id.into();
        self
    }

    /// Sets the login id of the user that hit the error.
    pub fn login_id(mut self, login_id: impl Into<String>) -> Self {
        self.login_id = Some(login_id.into());
        self
    }

    /// Sets the notification flag (`Y` or `N`).
    pub fn notified_yn(mut self, notified_yn: impl Into<String>) -> Self {
        self.notified_yn = notified_yn.into();
        self
    }

    /// Builds and inserts the error log into the database.
    ///
    /// # Returns
    /// - `Ok(entity::adm_error_log::Model)` - Created error log
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::adm_error_log::Model, DbErr> {
        entity::adm_error_log::ActiveModel {
            error_id: ActiveValue::Set(self.error_id),
            error_message: ActiveValue::Set(self.error_message),
            error_body: ActiveValue::Set(None),
            host_ip: ActiveValue::Set(None),
            client_ip: ActiveValue::Set(None),
            login_id: ActiveValue::Set(self.login_id),
            notified_yn: ActiveValue::Set(self.notified_yn),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an error log with default values.
pub async fn create_error_log(
    db: &DatabaseConnection,
) -> Result<entity::adm_error_log::Model, DbErr> {
    ErrorLogFactory::new(db).build().await
}
