//! Data transfer objects shared by the HTTP boundary.
//!
//! These types describe the JSON shapes that cross the API: the uniform
//! `ApiResultEntity` envelope, return status codes, trace records and the
//! per-resource request/response bodies.

pub mod adm_user;
pub mod api;
pub mod error_log;
pub mod return_status;
