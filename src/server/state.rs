//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for outbound REST and mail gateway requests
//! - Transaction holder written once at bootstrap
//! - Field transformation engine
//! - Rate limiter and the policy applied to rate limited routes
//! - Trace switches and mail gateway settings

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    integration::mail::MailConfig,
    middleware::{
        rate_limit::{RateLimitPolicy, RateLimiter},
        trace::TraceConfig,
    },
    trans_param::engine::TransParamEngine,
    transaction::TransactionHolder,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - the holder, engine and limiter are reference counted
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    pub http_client: reqwest::Client,

    /// Transaction manager and user transaction, set once while booting.
    pub transactions: Arc<TransactionHolder>,

    /// Resolves display fields of outgoing DTOs.
    pub trans_param: Arc<TransParamEngine>,

    pub rate_limiter: Arc<dyn RateLimiter>,

    /// Policy applied to every rate limited route.
    pub rate_limit_policy: RateLimitPolicy,

    pub trace_config: TraceConfig,

    /// Mail gateway settings; error notification is disabled when `None`.
    pub mail: Option<MailConfig>,
}
