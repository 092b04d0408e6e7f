//! Named counters used to mint sequential business codes.

/// Key space of a serial counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialName {
    ErrorId,
}

impl SerialName {
    /// Name of the counter row in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ErrorId => "ERROR_ID",
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Self::ErrorId => "E",
        }
    }

    /// Formats a counter value as a business code, e.g. `E0000000042`.
    pub fn format(&self, value: i64) -> String {
        format!("{}{:010}", self.prefix(), value)
    }
}
