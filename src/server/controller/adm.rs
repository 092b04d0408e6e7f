use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    model::{
        adm_user::AdmUserDto,
        api::ApiResultEntity,
        error_log::{CreateErrorLogDto, ErrorLogDto},
    },
    server::{
        data::adm_user::AdmUserRepository,
        error::AppError,
        integration::{mail::RestMailService, rest::RestRepository},
        middleware::trace::TraceContext,
        model::{adm_user::AdmUser, error_log::CreateErrorLogParam},
        service::{adm::AdmService, error_log::ErrorLogService},
        state::AppState,
    },
};

/// Tag for grouping administration endpoints in OpenAPI documentation
pub static ADM_TAG: &str = "adm";

const FORWARDED_FOR: &str = "x-forwarded-for";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmUserCodeQuery {
    #[serde(default)]
    pub adm_user_code: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmUserNameQuery {
    #[serde(default)]
    pub adm_user_name: String,
}

/// Rate limited test endpoint.
///
/// Returns the literal `Success!!` while the route's rate limit budget lasts.
/// Calls beyond the budget are rejected by the rate limit layer before this
/// handler runs.
///
/// # Returns
/// - `200 OK` - `Success!!`
/// - `429 Too Many Requests` - Rate limit exceeded
#[utoipa::path(
    post,
    path = "/adm/rateLimitTest",
    tag = ADM_TAG,
    responses(
        (status = 200, description = "Within the rate limit", body = String),
        (status = 429, description = "Rate limit exceeded", body = ApiResultEntity<String>)
    ),
)]
pub async fn rate_limit_test() -> &'static str {
    "Success!!"
}

/// Get an administrative user by code.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `trace` - Request trace collector
/// - `query` - `admUserCode` query parameter
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Malformed code
/// - `404 Not Found` - No user with that code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/adm/admUser",
    tag = ADM_TAG,
    params(
        ("admUserCode" = String, Query, description = "Business code of the user")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = ApiResultEntity<AdmUserDto>),
        (status = 400, description = "Malformed user code", body = ApiResultEntity<String>),
        (status = 404, description = "User not found", body = ApiResultEntity<String>),
        (status = 500, description = "Internal server error", body = ApiResultEntity<String>)
    ),
)]
pub async fn get_adm_user_by_code(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceContext>,
    Query(query): Query<AdmUserCodeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdmService::new(AdmUserRepository::new(&state.db).traced(trace.clone()));

    let user = service.get_adm_user_by_code(&query.adm_user_code).await?;

    Ok(Json(trace.attach(ApiResultEntity::success(user.into_dto()))))
}

/// Get every administrative user with the given name.
///
/// # Returns
/// - `200 OK` - Matching users ordered by code, possibly empty
/// - `400 Bad Request` - Blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/adm/admUsers",
    tag = ADM_TAG,
    params(
        ("admUserName" = String, Query, description = "Exact user name to match")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = ApiResultEntity<Vec<AdmUserDto>>),
        (status = 400, description = "Blank user name", body = ApiResultEntity<String>),
        (status = 500, description = "Internal server error", body = ApiResultEntity<String>)
    ),
)]
pub async fn get_adm_users_by_name(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceContext>,
    Query(query): Query<AdmUserNameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdmService::new(AdmUserRepository::new(&state.db).traced(trace.clone()));

    let users = service.get_adm_users_by_name(&query.adm_user_name).await?;
    let dtos: Vec<AdmUserDto> = users.into_iter().map(AdmUser::into_dto).collect();

    Ok(Json(trace.attach(ApiResultEntity::success(dtos))))
}

/// Create or replace an administrative user.
///
/// Saving the same code twice leaves a single user holding the latest name.
///
/// # Returns
/// - `200 OK` - The stored user
/// - `400 Bad Request` - Malformed code or blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/adm/admUser",
    tag = ADM_TAG,
    request_body = AdmUserDto,
    responses(
        (status = 200, description = "Successfully saved user", body = ApiResultEntity<AdmUserDto>),
        (status = 400, description = "Invalid user data", body = ApiResultEntity<String>),
        (status = 500, description = "Internal server error", body = ApiResultEntity<String>)
    ),
)]
pub async fn save_adm_user(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceContext>,
    Json(payload): Json<AdmUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdmService::new(AdmUserRepository::new(&state.db).traced(trace.clone()));

    let user = service.save_adm_user(AdmUser::from_dto(payload)).await?;

    Ok(Json(trace.attach(ApiResultEntity::success(user.into_dto()))))
}

/// Delete an administrative user by code.
///
/// # Returns
/// - `200 OK` - Code of the deleted user
/// - `400 Bad Request` - Malformed code
/// - `404 Not Found` - No user with that code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/adm/admUser",
    tag = ADM_TAG,
    params(
        ("admUserCode" = String, Query, description = "Business code of the user")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = ApiResultEntity<String>),
        (status = 400, description = "Malformed user code", body = ApiResultEntity<String>),
        (status = 404, description = "User not found", body = ApiResultEntity<String>),
        (status = 500, description = "Internal server error", body = ApiResultEntity<String>)
    ),
)]
pub async fn delete_adm_user(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceContext>,
    Query(query): Query<AdmUserCodeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdmService::new(AdmUserRepository::new(&state.db).traced(trace.clone()));

    service.delete_adm_user(&query.adm_user_code).await?;

    Ok(Json(trace.attach(ApiResultEntity::success(query.adm_user_code))))
}

/// Record an error report.
///
/// Allocates the next error id, stores the report and, when a mail gateway and
/// recipients are configured, mails the report to them. The caller's address
/// is taken from the first `X-Forwarded-For` entry.
///
/// # Returns
/// - `200 OK` - The stored error log
/// - `400 Bad Request` - Blank error message
/// - `502 Bad Gateway` - Stored, but the notification mail failed
/// - `500 Internal Server Error` - Database or transaction error
#[utoipa::path(
    post,
    path = "/adm/errorLog",
    tag = ADM_TAG,
    request_body = CreateErrorLogDto,
    responses(
        (status = 200, description = "Successfully recorded error log", body = ApiResultEntity<ErrorLogDto>),
        (status = 400, description = "Invalid error log data", body = ApiResultEntity<String>),
        (status = 500, description = "Internal server error", body = ApiResultEntity<String>),
        (status = 502, description = "Notification mail failed", body = ApiResultEntity<String>)
    ),
)]
pub async fn create_error_log(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceContext>,
    headers: HeaderMap,
    Json(payload): Json<CreateErrorLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let mail = state.mail.as_ref().map(|config| {
        let rest = RestRepository::new(state.http_client.clone()).traced(trace.clone());
        (RestMailService::new(rest, config), config.recipients.as_slice())
    });

    let mut service = ErrorLogService::new(&state.transactions).traced(trace.clone());
    if let Some((mail, recipients)) = &mail {
        service = service.with_notifier(mail, recipients);
    }

    let param = CreateErrorLogParam::from_dto(payload, client_ip(&headers));
    let log = service.record(param).await?;

    let mut dto = log.into_dto();
    state.trans_param.resolve(&mut dto, &trace).await;

    Ok(Json(trace.attach(ApiResultEntity::success(dto))))
}

/// Get an error log by id with its display fields resolved.
///
/// `loginName` carries the name of the user identified by `loginId` and
/// `notifiedDesc` the description of `notifiedYn`.
///
/// # Returns
/// - `200 OK` - The error log
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No error log with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/adm/errorLog/{error_id}",
    tag = ADM_TAG,
    params(
        ("error_id" = String, Path, description = "Error log id, e.g. E0000000001")
    ),
    responses(
        (status = 200, description = "Successfully retrieved error log", body = ApiResultEntity<ErrorLogDto>),
        (status = 400, description = "Malformed error id", body = ApiResultEntity<String>),
        (status = 404, description = "Error log not found", body = ApiResultEntity<String>),
        (status = 500, description = "Internal server error", body = ApiResultEntity<String>)
    ),
)]
pub async fn get_error_log(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceContext>,
    Path(error_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ErrorLogService::new(&state.transactions).traced(trace.clone());

    let log = service.get(&error_id).await?;

    let mut dto = log.into_dto();
    state.trans_param.resolve(&mut dto, &trace).await;

    Ok(Json(trace.attach(ApiResultEntity::success(dto))))
}

fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}
