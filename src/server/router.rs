use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        adm_user::AdmUserDto,
        api::{RestTracer, SqlTracer},
        error_log::{CreateErrorLogDto, ErrorLogDto},
        return_status::ReturnStatusDto,
    },
    server::{
        controller::adm,
        middleware::{
            rate_limit::{rate_limit, RateLimited},
            trace::trace_context,
        },
        state::AppState,
    },
};

/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "bizframe API",
        description = "Administrative user maintenance and error log recording."
    ),
    paths(
        adm::rate_limit_test,
        adm::get_adm_user_by_code,
        adm::get_adm_users_by_name,
        adm::save_adm_user,
        adm::delete_adm_user,
        adm::create_error_log,
        adm::get_error_log,
    ),
    components(schemas(
        AdmUserDto,
        ErrorLogDto,
        CreateErrorLogDto,
        ReturnStatusDto,
        SqlTracer,
        RestTracer
    )),
    tags(
        (name = "adm", description = "Administrative users and error logs")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every `/adm` route gets a fresh trace collector per request. Rate limited
/// routes carry their own guard layer, so the limit is checked before the
/// handler runs.
pub fn router(state: AppState) -> Router {
    let rate_limit_test = RateLimited::new(
        "adm.rate_limit_test",
        state.rate_limit_policy,
        state.rate_limiter.clone(),
    );

    let adm_routes = Router::new()
        .route(
            "/adm/rateLimitTest",
            post(adm::rate_limit_test)
                .layer(middleware::from_fn_with_state(rate_limit_test, rate_limit)),
        )
        .route(
            "/adm/admUser",
            get(adm::get_adm_user_by_code)
                .put(adm::save_adm_user)
                .delete(adm::delete_adm_user),
        )
        .route("/adm/admUsers", get(adm::get_adm_users_by_name))
        .route("/adm/errorLog", post(adm::create_error_log))
        .route("/adm/errorLog/{error_id}", get(adm::get_error_log))
        .layer(middleware::from_fn_with_state(
            state.trace_config,
            trace_context,
        ))
        .with_state(state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(adm_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
