//! Declarative per-route rate limiting.
//!
//! A route opts in at registration time by layering [`rate_limit`] with a
//! [`RateLimited`] guard naming the operation and its [`RateLimitPolicy`]:
//!
//! ```rust,ignore
//! .route(
//!     "/adm/rateLimitTest",
//!     post(adm::rate_limit_test).layer(middleware::from_fn_with_state(
//!         RateLimited::new("adm.rate_limit_test", policy, limiter),
//!         rate_limit,
//!     )),
//! )
//! ```
//!
//! The middleware resolves the policy through the [`RateLimiter`] trait before
//! the handler runs. A rejected request receives 429 with a `Busy` envelope and
//! the handler is never invoked.

use std::{
    collections::HashMap,
    num::NonZeroU32,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{DefaultDirectRateLimiter, Quota};

use crate::model::{
    api::ApiResultEntity,
    return_status::{ReturnCode, ReturnStatus},
};

/// Token bucket shape applied to one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    quota: Quota,
}

impl RateLimitPolicy {
    /// Allows `permits` requests per second with an equal burst.
    pub fn per_second(permits: NonZeroU32) -> Self {
        Self {
            quota: Quota::per_second(permits),
        }
    }

    /// Allows a burst of `burst` requests, replenishing one permit every `period`.
    ///
    /// Returns `None` for a zero period.
    pub fn with_period(period: Duration, burst: NonZeroU32) -> Option<Self> {
        Quota::with_period(period).map(|quota| Self {
            quota: quota.allow_burst(burst),
        })
    }

    pub fn burst(&self) -> NonZeroU32 {
        self.quota.burst_size()
    }
}

/// Resolution interface between the dispatcher and the limiter state.
pub trait RateLimiter: Send + Sync {
    /// Takes one permit for `operation`, returning `false` when none is available.
    fn try_acquire(&self, operation: &str, policy: &RateLimitPolicy) -> bool;
}

/// Limiter keeping one GCRA bucket per operation in process memory.
///
/// The bucket is created from the policy seen on the first request for an
/// operation.
#[derive(Default)]
pub struct InProcessRateLimiter {
    limiters: Mutex<HashMap<String, Arc<DefaultDirectRateLimiter>>>,
}

impl InProcessRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    fn limiter_for(&self, operation: &str, policy: &RateLimitPolicy) -> Arc<DefaultDirectRateLimiter> {
        let mut limiters = self.limiters.lock().unwrap_or_else(PoisonError::into_inner);

        limiters
            .entry(operation.to_string())
            .or_insert_with(|| Arc::new(DefaultDirectRateLimiter::direct(policy.quota)))
            .clone()
    }
}

impl RateLimiter for InProcessRateLimiter {
    fn try_acquire(&self, operation: &str, policy: &RateLimitPolicy) -> bool {
        self.limiter_for(operation, policy).check().is_ok()
    }
}

/// Rate limit metadata attached to a single route.
#[derive(Clone)]
pub struct RateLimited {
    operation: &'static str,
    policy: RateLimitPolicy,
    limiter: Arc<dyn RateLimiter>,
}

impl RateLimited {
    pub fn new(
        operation: &'static str,
        policy: RateLimitPolicy,
        limiter: Arc<dyn RateLimiter>,
    ) -> Self {
        Self {
            operation,
            policy,
            limiter,
        }
    }
}

/// Dispatcher enforcing the route's policy before the handler runs.
pub async fn rate_limit(State(guard): State<RateLimited>, request: Request, next: Next) -> Response {
    if guard.limiter.try_acquire(guard.operation, &guard.policy) {
        return next.run(request).await;
    }

    tracing::warn!(operation = guard.operation, "Rate limit exceeded");

    let status = StatusCode::TOO_MANY_REQUESTS;
    let body = ApiResultEntity::<()>::failure(
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        &ReturnCode::Busy,
        ReturnCode::Busy.return_desc(),
    );

    (status, Json(body)).into_response()
}
