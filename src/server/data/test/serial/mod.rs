use crate::{
    model::api::ApiResultEntity,
    server::{
        data::serial::SerialRepository,
        middleware::trace::{TraceConfig, TraceContext},
        model::serial::SerialName,
    },
};
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr, TransactionTrait};
use test_utils::builder::TestBuilder;

mod next_code;
