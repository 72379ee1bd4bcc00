//! Stable error codes for spec diagnostics.

use serde::Serialize;

/// Machine-readable category of a [`super::errors::SpecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// `v` is not a version this crate understands.
    UnsupportedVersion,
    /// Two settings contradict each other.
    InvalidCombo,
    /// A limit is out of range.
    LimitExceeded,
    /// A field the schema does not know.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidCombo => "invalid_combo",
            Self::LimitExceeded => "limit_exceeded",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
