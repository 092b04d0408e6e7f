//! Return status contract carried by every response envelope.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Business-level outcome of an operation, independent of the HTTP status.
pub trait ReturnStatus {
    /// Stable machine readable code, e.g. `"0000"`.
    fn return_code(&self) -> &str;

    /// Category the code belongs to, e.g. `"FRAME"`.
    fn return_type(&self) -> &str;

    /// Human readable description of the code.
    fn return_desc(&self) -> &str;

    fn equals_code(&self, code: &str) -> bool {
        self.return_code() == code
    }
}

/// Framework level return codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCode {
    Success,
    /// The request was rejected by a rate limit before reaching its handler.
    Busy,
    Unauthorized,
    Exception,
}

impl ReturnStatus for ReturnCode {
    fn return_code(&self) -> &str {
        match self {
            Self::Success => "0000",
            Self::Busy => "9997",
            Self::Unauthorized => "9998",
            Self::Exception => "9999",
        }
    }

    fn return_type(&self) -> &str {
        "FRAME"
    }

    fn return_desc(&self) -> &str {
        match self {
            Self::Success => "Success",
            Self::Busy => "System is busy, please try again later",
            Self::Unauthorized => "Unauthorized",
            Self::Exception => "Unexpected error",
        }
    }
}

/// Serialized form of a [`ReturnStatus`], flattened into the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnStatusDto {
    pub return_code: String,
    pub return_type: String,
    pub return_desc: String,
}

impl ReturnStatusDto {
    pub fn from_status(status: &impl ReturnStatus) -> Self {
        Self {
            return_code: status.return_code().to_string(),
            return_type: status.return_type().to_string(),
            return_desc: status.return_desc().to_string(),
        }
    }
}

impl ReturnStatus for ReturnStatusDto {
    fn return_code(&self) -> &str {
        &self.return_code
    }

    fn return_type(&self) -> &str {
        &self.return_type
    }

    fn return_desc(&self) -> &str {
        &self.return_desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_codes_are_stable() {
        assert_eq!(ReturnCode::Success.return_code(), "0000");
        assert_eq!(ReturnCode::Busy.return_code(), "9997");
        assert_eq!(ReturnCode::Unauthorized.return_code(), "9998");
        assert_eq!(ReturnCode::Exception.return_code(), "9999");
        assert!(ReturnCode::Exception.equals_code("9999"));
        assert!(!ReturnCode::Success.equals_code("9999"));
    }

    #[test]
    fn dto_mirrors_status() {
        let dto = ReturnStatusDto::from_status(&ReturnCode::Busy);

        assert_eq!(dto.return_type, "FRAME");
        assert!(dto.equals_code(ReturnCode::Busy.return_code()));
    }
}
