//! Persisted error report keyed by a serial error id.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "adm_error_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub error_id: String,
    #[sea_orm(column_type = "Text")]
    pub error_message: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub error_body: Option<String>,
    pub host_ip: Option<String>,
    pub client_ip: Option<String>,
    pub login_id: Option<String>,
    /// `Y` once a notification mail went out, `N` otherwise.
    pub notified_yn: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
