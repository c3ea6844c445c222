//! Application Identifier values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// AI 01: Global Trade Item Number.
pub const AI_GTIN: &str = "01";

/// AI 21: serial number.
pub const AI_SERIAL: &str = "21";

/// AI 10: batch or lot number.
pub const AI_BATCH_LOT: &str = "10";

/// AI 17: expiration date (YYMMDD).
pub const AI_EXPIRY: &str = "17";

/// Returns a human readable name for the AIs this crate emits itself.
pub fn ai_label(code: &str) -> Option<&'static str> {
    match code {
        AI_GTIN => Some("GTIN"),
        AI_SERIAL => Some("Serial number"),
        AI_BATCH_LOT => Some("Batch/lot number"),
        AI_EXPIRY => Some("Expiry date (YYMMDD)"),
        _ => None,
    }
}

/// Error parsing a `CODE=VALUE` pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiParseError {
    #[error("Expected CODE=VALUE, got '{0}'")]
    MissingSeparator(String),
}

/// One Application Identifier assignment.
///
/// Codes are not checked against the GS1 AI table and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiValue {
    /// Numeric AI code, e.g. `"90"`.
    pub code: String,
    /// Raw (unencoded) value.
    pub value: String,
}

impl AiValue {
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
        }
    }

    /// True when both code and value are non-empty, i.e. the pair will be emitted.
    pub fn is_complete(&self) -> bool {
        !self.code.is_empty() && !self.value.is_empty()
    }
}

impl fmt::Display for AiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.code, self.value)
    }
}

impl FromStr for AiValue {
    type Err = AiParseError;

    /// Parses `CODE=VALUE`, splitting on the first `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, value) = s
            .split_once('=')
            .ok_or_else(|| AiParseError::MissingSeparator(s.to_string()))?;
        Ok(Self::new(code.trim(), value))
    }
}
