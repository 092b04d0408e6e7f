//! Administrative user repository.
//!
//! Adapts the generic [`BaseRepository`] to the [`AdmUserDao`] contract and adds
//! the name lookup. Rows are converted to the `AdmUser` domain model here.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::server::{
    data::{
        base::{BaseRepository, CodeEntity, NameEntity},
        dao::{AdmUserDao, BaseDao},
    },
    middleware::trace::TraceContext,
    model::adm_user::AdmUser,
};

impl CodeEntity for entity::adm_user::Entity {
    fn code_column() -> Self::Column {
        entity::adm_user::Column::UserCode
    }

    fn code_of(model: &Self::Model) -> &str {
        &model.user_code
    }
}

impl NameEntity for entity::adm_user::Entity {
    fn name_column() -> Self::Column {
        entity::adm_user::Column::UserName
    }
}

pub struct AdmUserRepository<'a, C = DatabaseConnection> {
    base: BaseRepository<'a, entity::adm_user::Entity, C>,
}

impl<'a, C: ConnectionTrait> AdmUserRepository<'a, C> {
    /// Creates a new AdmUserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `AdmUserRepository` - New repository instance
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

    /// Returns one page of users ordered by code with the total user count.
    pub async fn find_page(&self, page: u64, per_page: u64) -> Result<(Vec<AdmUser>, u64), DbErr> {
        let (models, total) = self.base.find_page(page, per_page).await?;

        Ok((models.into_iter().map(AdmUser::from_entity).collect(), total))
    }

    /// Returns the users whose code is in `codes`, ordered by code.
    ///
    /// Unknown codes are skipped.
    pub async fn find_all_by_id(&self, codes: &[String]) -> Result<Vec<AdmUser>, DbErr> {
        let models = self.base.find_all_by_id(codes).await?;

        Ok(models.into_iter().map(AdmUser::from_entity).collect())
    }
}

#[async_trait]
impl<'a, C> BaseDao<AdmUser> for AdmUserRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_id(&self, code: &str) -> Result<Option<AdmUser>, DbErr> {
        Ok(self.base.find_by_id(code).await?.map(AdmUser::from_entity))
    }

    async fn exist_by_id(&self, code: &str) -> Result<bool, DbErr> {
        self.base.exist_by_id(code).await
    }

    async fn find_all(&self) -> Result<Vec<AdmUser>, DbErr> {
        let models = self.base.find_all().await?;

        Ok(models.into_iter().map(AdmUser::from_entity).collect())
    }

    async fn count(&self) -> Result<u64, DbErr> {
        self.base.count().await
    }

    async fn insert(&self, item: AdmUser) -> Result<AdmUser, DbErr> {
        let model = self.base.insert(item.into_entity()).await?;

        Ok(AdmUser::from_entity(model))
    }

    async fn update(&self, item: AdmUser) -> Result<u64, DbErr> {
        self.base.update(item.into_entity()).await
    }

    async fn save(&self, item: AdmUser) -> Result<AdmUser, DbErr> {
        let model = self.base.save(item.into_entity()).await?;

        Ok(AdmUser::from_entity(model))
    }

    async fn delete_by_id(&self, code: &str) -> Result<u64, DbErr> {
        self.base.delete_by_id(code).await
    }
}

#[async_trait]
impl<'a, C> AdmUserDao for AdmUserRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_user_name(&self, user_name: &str) -> Result<Vec<AdmUser>, DbErr> {
        let models = self.base.find_by_name(user_name).await?;

        Ok(models.into_iter().map(AdmUser::from_entity).collect())
    }
}
