//! Outbound HTTP collaborators.
//!
//! - `rest` - JSON REST client recording `RestTracer` entries
//! - `mail` - Mail sending contract and its HTTP gateway adapter

pub mod mail;
pub mod rest;
