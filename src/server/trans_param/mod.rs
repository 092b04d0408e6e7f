//! Declarative field transformation.
//!
//! A DTO describes which of its fields are display values derived from other
//! fields by exposing a static list of [`TransParamCode`] markers through
//! [`TransParamTarget`]. The [`engine::TransParamEngine`] walks those markers before
//! the DTO is serialized, reads each source field, resolves it through the
//! transformer the marker names, and writes the description into the target
//! field.
//!
//! Resolution sources:
//! - `Enums` - a registered [`TransParamEnum`] value table
//! - `Sys` and `Db` - a registered asynchronous [`TransParamService`]
//!
//! A marker that cannot be resolved is logged and leaves the target field as it was.
//! Lookups run on behalf of a request and record their statements into its
//! [`TraceContext`].

pub mod adm_user_name;
pub mod engine;
pub mod error_log;
pub mod yes_no;

use async_trait::async_trait;

use crate::server::{error::AppError, middleware::trace::TraceContext};

/// Where a transformer looks values up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// System parameters.
    Sys,
    /// A fixed enumeration compiled into the binary.
    Enums,
    /// Application tables.
    Db,
}

/// Transformation marker for one target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransParamCode {
    /// Field receiving the description.
    pub field: &'static str,
    pub source_type: SourceType,
    /// Lookup key passed to the transformer.
    pub key: &'static str,
    /// Field whose value is transformed.
    pub field_name: &'static str,
    /// Registered name of the transformer.
    pub transformer: &'static str,
}

/// A value carrying transformation markers.
pub trait TransParamTarget: Send {
    fn trans_param_codes() -> &'static [TransParamCode];

    /// Current value of `field_name`, `None` when unset or unknown.
    fn field_value(&self, field_name: &str) -> Option<String>;

    /// Writes `value` into `field`; unknown fields are ignored.
    fn set_field_value(&mut self, field: &str, value: String);
}

/// Asynchronous lookup of a description for a value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransParamService: Send + Sync {
    /// # Returns
    /// - `Ok(Some(String))` - Description of `value` under `key`
    /// - `Ok(None)` - No description known
    /// - `Err(AppError)` - Lookup failed
    async fn get_description(
        &self,
        key: &str,
        value: &str,
        trace: &TraceContext,
    ) -> Result<Option<String>, AppError>;
}

/// Enumeration usable as an `Enums` transformation source.
pub trait TransParamEnum: Sized + 'static {
    fn variants() -> &'static [Self];

    /// Stored value, e.g. `"Y"`.
    fn value(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn equal(&self, value: &str) -> bool {
        self.value() == value
    }
}
