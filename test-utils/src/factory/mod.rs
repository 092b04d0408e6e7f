//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_adm_user(&db).await?;
//!     let log = factory::create_error_log(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::adm_user::AdmUserFactory::new(&db)
//!     .code("A0001")
//!     .name("Alice")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `adm_user` - Create administrative user entities
//! - `adm_error_log` - Create error log entities
//! - `helpers` - Unique id generation shared by all factories

pub mod adm_error_log;
pub mod adm_user;
pub mod helpers;

pub use adm_error_log::create_error_log;
pub use adm_user::create_adm_user;
