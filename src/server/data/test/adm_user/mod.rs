use crate::server::{
    data::{
        adm_user::AdmUserRepository,
        dao::{AdmUserDao, BaseDao},
    },
    middleware::trace::{TraceConfig, TraceContext},
    model::adm_user::AdmUser,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_id;
mod find_all_by_id;
mod find_by_id;
mod find_by_user_name;
mod find_page;
mod save;
mod update;

fn adm_user(code: &str, name: &str) -> AdmUser {
    AdmUser {
        code: code.to_string(),
        name: name.to_string(),
    }
}
