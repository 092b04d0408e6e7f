//! Database repository layer.
//!
//! Repositories handle persistence for each domain in the application. They use
//! SeaORM entity models internally and return domain models, keeping the service
//! layer free of database types. `base` holds the generic code-keyed CRUD
//! implementation and `dao` the contracts services depend on.

pub mod adm_user;
pub mod base;
pub mod dao;
pub mod error_log;
pub mod serial;

#[cfg(test)]
mod test;
