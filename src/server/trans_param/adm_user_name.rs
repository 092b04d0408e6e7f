//! Resolves administrative user codes to user names.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{adm_user::AdmUserRepository, dao::BaseDao},
    error::AppError,
    middleware::trace::TraceContext,
    trans_param::TransParamService,
};

pub struct AdmUserNameTransformer {
    db: DatabaseConnection,
}

impl AdmUserNameTransformer {
    /// Registered transformer name.
    pub const NAME: &'static str = "AdmUserName";
    /// Lookup key understood by this transformer.
    pub const KEY: &'static str = "ADM_USER";

    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransParamService for AdmUserNameTransformer {
    async fn get_description(
        &self,
        key: &str,
        value: &str,
        trace: &TraceContext,
    ) -> Result<Option<String>, AppError> {
        if key != Self::KEY {
            return Ok(None);
        }

        let user = AdmUserRepository::new(&self.db)
            .traced(trace.clone())
            .find_by_id(value)
            .await?;

        Ok(user.map(|user| user.name))
    }
}
