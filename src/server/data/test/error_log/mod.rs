use crate::{
    model::api::ApiResultEntity,
    server::{
        data::error_log::ErrorLogRepository,
        middleware::trace::{TraceConfig, TraceContext},
        model::error_log::CreateErrorLogParam,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod mark_notified;

fn param(message: &str) -> CreateErrorLogParam {
    CreateErrorLogParam {
        error_message: message.to_string(),
        error_body: Some("stack".to_string()),
        host_ip: Some("10.0.0.1".to_string()),
        client_ip: Some("192.168.0.7".to_string()),
        login_id: Some("U001".to_string()),
    }
}
