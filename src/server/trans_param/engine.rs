use std::{collections::HashMap, sync::Arc};

use crate::server::{
    error::AppError,
    middleware::trace::TraceContext,
    trans_param::{
        SourceType, TransParamCode, TransParamEnum, TransParamService, TransParamTarget,
    },
};

type EnumLookup = fn(&str) -> Option<&'static str>;

fn describe_enum<E: TransParamEnum>(value: &str) -> Option<&'static str> {
    E::variants()
        .iter()
        .find(|variant| variant.equal(value))
        .map(|variant| variant.description())
}

/// Registry of transformers and resolver of [`TransParamCode`] markers.
#[derive(Default)]
pub struct TransParamEngine {
    services: HashMap<&'static str, Arc<dyn TransParamService>>,
    enums: HashMap<&'static str, EnumLookup>,
}

impl TransParamEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a lookup service for `Sys` and `Db` markers.
    pub fn with_service(mut self, name: &'static str, service: Arc<dyn TransParamService>) -> Self {
        self.services.insert(name, service);
        self
    }

    /// Registers an enumeration for `Enums` markers.
    pub fn with_enum<E: TransParamEnum>(mut self, name: &'static str) -> Self {
        self.enums.insert(name, describe_enum::<E>);
        self
    }

    /// Resolves every marker of `target` in declaration order.
    ///
    /// Markers whose source field is unset are skipped. Failed or empty lookups
    /// are logged and leave the target field unchanged. Lookups record into
    /// `trace`.
    pub async fn resolve<T: TransParamTarget>(&self, target: &mut T, trace: &TraceContext) {
        for code in T::trans_param_codes() {
            let Some(value) = target.field_value(code.field_name) else {
                continue;
            };

            match self.describe(code, &value, trace).await {
                Ok(Some(description)) => target.set_field_value(code.field, description),
                Ok(None) => {
                    tracing::warn!(
                        field = code.field,
                        transformer = code.transformer,
                        "No description for '{}', keeping original value",
                        value
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        field = code.field,
                        transformer = code.transformer,
                        "Field transformation failed, keeping original value: {}",
                        err
                    );
                }
            }
        }
    }

    async fn describe(
        &self,
        code: &TransParamCode,
        value: &str,
        trace: &TraceContext,
    ) -> Result<Option<String>, AppError> {
        match code.source_type {
            SourceType::Enums => {
                let lookup = self.enums.get(code.transformer).ok_or_else(|| {
                    AppError::InternalError(format!("Unknown enum transformer {}", code.transformer))
                })?;

                Ok(lookup(value).map(str::to_string))
            }
            SourceType::Sys | SourceType::Db => {
                let service = self.services.get(code.transformer).ok_or_else(|| {
                    AppError::InternalError(format!("Unknown transformer {}", code.transformer))
                })?;

                service.get_description(code.key, value, trace).await
            }
        }
    }
}
