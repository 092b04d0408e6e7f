//! DAO contracts consumed by the service layer.
//!
//! Services depend on these traits rather than on concrete repositories so the
//! persistence side can be swapped (or mocked in tests).

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::model::adm_user::AdmUser;

/// CRUD operations for a domain type keyed by business code.
///
/// Absence is explicit: lookups return `None`, and updates or deletes of a
/// missing code report zero affected rows instead of failing.
#[async_trait]
pub trait BaseDao<T>: Send + Sync {
    async fn find_by_id(&self, code: &str) -> Result<Option<T>, DbErr>;

    async fn exist_by_id(&self, code: &str) -> Result<bool, DbErr>;

    async fn find_all(&self) -> Result<Vec<T>, DbErr>;

    async fn count(&self) -> Result<u64, DbErr>;

    async fn insert(&self, item: T) -> Result<T, DbErr>;

    /// Overwrites an existing row, returning the number of rows affected.
    async fn update(&self, item: T) -> Result<u64, DbErr>;

    /// Creates or replaces the row keyed by the item's code.
    async fn save(&self, item: T) -> Result<T, DbErr>;

    /// Deletes by code, returning the number of rows affected.
    async fn delete_by_id(&self, code: &str) -> Result<u64, DbErr>;
}

/// Administrative user persistence.
#[async_trait]
pub trait AdmUserDao: BaseDao<AdmUser> {
    /// Every user whose name equals `user_name`, ordered by code.
    async fn find_by_user_name(&self, user_name: &str) -> Result<Vec<AdmUser>, DbErr>;
}

#[cfg(test)]
mockall::mock! {
    pub AdmUserStore {}

    #[async_trait]
    impl BaseDao<AdmUser> for AdmUserStore {
        async fn find_by_id(&self, code: &str) -> Result<Option<AdmUser>, DbErr>;
        async fn exist_by_id(&self, code: &str) -> Result<bool, DbErr>;
        async fn find_all(&self) -> Result<Vec<AdmUser>, DbErr>;
        async fn count(&self) -> Result<u64, DbErr>;
        async fn insert(&self, item: AdmUser) -> Result<AdmUser, DbErr>;
        async fn update(&self, item: AdmUser) -> Result<u64, DbErr>;
        async fn save(&self, item: AdmUser) -> Result<AdmUser, DbErr>;
        async fn delete_by_id(&self, code: &str) -> Result<u64, DbErr>;
    }

    #[async_trait]
    impl AdmUserDao for AdmUserStore {
        async fn find_by_user_name(&self, user_name: &str) -> Result<Vec<AdmUser>, DbErr>;
    }
}
