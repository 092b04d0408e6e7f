//! Administrative backend built on a generic, code-keyed CRUD layer.
//!
//! `model` holds the DTOs shared with API callers; `server` holds everything
//! that runs behind the HTTP boundary.

pub mod model;
pub mod server;
