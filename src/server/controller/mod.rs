//! HTTP request handlers.
//!
//! Controllers extract request data, build the services they need from
//! `AppState`, convert between DTOs and domain models, and wrap every result in
//! an `ApiResultEntity` carrying the request's traces.

pub mod adm;

#[cfg(test)]
mod test;
