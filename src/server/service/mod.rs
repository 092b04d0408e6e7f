//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Validation**: Rejecting malformed input before it reaches the data layer
//! - **Absence handling**: Turning missing rows into `AppError::NotFound`
//! - **Orchestration**: Coordinating repositories, transactions and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod adm;
pub mod error_log;
