//! SeaORM entity models for the bizframe schema.
//!
//! Every table is keyed by a business code rather than a surrogate integer id.
//! The schema itself is owned by the `migration` crate.

pub mod prelude;

pub mod adm_error_log;
pub mod adm_user;
pub mod serial_no;
