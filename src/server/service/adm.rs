//! Administrative user service.
//!
//! `AdmService` is generic over its [`AdmUserDao`] so the HTTP layer runs it on
//! the SeaORM repository while tests substitute a mock.

use crate::server::{
    data::dao::AdmUserDao,
    error::AppError,
    model::adm_user::AdmUser,
    util::validate::{validate_code, validate_not_blank},
};

pub struct AdmService<D> {
    dao: D,
}

impl<D: AdmUserDao> AdmService<D> {
    /// Creates a new AdmService instance.
    ///
    /// # Arguments
    /// - `dao` - Administrative user persistence
    ///
    /// # Returns
    /// - `AdmService` - New service instance
    pub fn new(dao: D) -> Self {
        Self { dao }
    }

    /// Retrieves a user by code.
    ///
    /// Every call reaches the DAO exactly once; nothing is cached.
    ///
    /// # Arguments
    /// - `code` - Business code of the user
    ///
    /// # Returns
    /// - `Ok(AdmUser)` - The user
    /// - `Err(AppError::BadRequest)` - Malformed code
    /// - `Err(AppError::NotFound)` - No user with that code
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_adm_user_by_code(&self, code: &str) -> Result<AdmUser, AppError> {
        let code = validate_code("admUserCode", code)?;

        self.dao
            .find_by_id(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Adm user {} not found", code)))
    }

    /// Retrieves every user with the given name, ordered by code.
    ///
    /// # Returns
    /// - `Ok(Vec<AdmUser>)` - Matching users, empty when none match
    /// - `Err(AppError::BadRequest)` - Blank name
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_adm_users_by_name(&self, name: &str) -> Result<Vec<AdmUser>, AppError> {
        let name = validate_not_blank("admUserName", name)?;

        Ok(self.dao.find_by_user_name(name).await?)
    }

    /// Creates the user or replaces the one with the same code.
    pub async fn save_adm_user(&self, user: AdmUser) -> Result<AdmUser, AppError> {
        validate_code("userCode", &user.code)?;
        validate_not_blank("userName", &user.name)?;

        Ok(self.dao.save(user).await?)
    }

    /// Deletes a user by code.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::BadRequest)` - Malformed code
    /// - `Err(AppError::NotFound)` - No user with that code
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_adm_user(&self, code: &str) -> Result<(), AppError> {
        let code = validate_code("admUserCode", code)?;

        match self.dao.delete_by_id(code).await? {
            0 => Err(AppError::NotFound(format!("Adm user {} not found", code))),
            _ => Ok(()),
        }
    }
}
