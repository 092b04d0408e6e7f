//! Request processing middleware.
//!
//! - `trace` - Per-request SQL and REST trace collection
//! - `rate_limit` - Declarative per-route rate limiting

pub mod rate_limit;
pub mod trace;
