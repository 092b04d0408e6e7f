//! Administrative user factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test administrative users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::adm_user::AdmUserFactory;
///
/// let user = AdmUserFactory::new(&db)
///     .code("A0001")
///     .name("Alice")
///     .build()
///     .await?;
/// ```
pub struct AdmUserFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
}

impl<'a> AdmUserFactory<'a> {
    /// Creates a new AdmUserFactory with default values.
    ///
    /// Defaults:
    /// - code: `"U{id}"` where id is auto-incremented
    /// - name: `"User {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AdmUserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("U{:05}", id),
            name: format!("User {}", id),
        }
    }

    /// Sets the user code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the user name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::adm_user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::adm_user::Model, DbErr> {
        entity::adm_user::ActiveModel {
            user_code: ActiveValue::Set(self.code),
            user_name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an administrative user with default values.
///
/// Shorthand for `AdmUserFactory::new(db).build().await`.
pub async fn create_adm_user(db: &DatabaseConnection) -> Result<entity::adm_user::Model, DbErr> {
    AdmUserFactory::new(db).build().await
}
