//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints,
//! business logic, data access and the declarative cross-cutting concerns that
//! wrap them. The backend uses Axum as the web framework and SeaORM for database
//! operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Generic code-keyed CRUD and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Per-route rate limiting and per-request trace collection
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, holders, etc.)
//! - **Startup** (`startup`) - Initialization of tracing, database, and shared services
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Transactions** (`transaction`) - Bootstrap-time transaction holder and user transactions
//! - **Field Transformation** (`trans_param/`) - Resolution of DTO display fields
//! - **Integration** (`integration/`) - Outbound REST client and mail gateway
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** installs the trace collector and enforces rate limits
//! 3. **Controller** converts DTOs to params, calls service
//! 4. **Service** validates input, executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Service** returns domain model to controller
//! 7. **Controller** converts domain model to DTO, resolves display fields, returns the envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod integration;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod trans_param;
pub mod transaction;
pub mod util;
