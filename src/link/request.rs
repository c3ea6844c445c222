//! Encoder input.

use serde::{Deserialize, Serialize};

use super::ai::AiValue;

/// Everything needed to build one Digital Link.
///
/// Optional fields holding an empty string behave exactly like `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalLinkRequest {
    /// Resolver base URI. A single trailing `/` is dropped.
    pub domain: String,
    /// GTIN as typed; non-digits are ignored.
    pub gtin: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub batch_lot: Option<String>,
    /// Expiry date, YYMMDD once separators are removed.
    #[serde(default)]
    pub expiry_date: Option<String>,
    /// Additional AIs, emitted in this order after the standard ones.
    #[serde(default)]
    pub custom_ais: Vec<AiValue>,
}

impl DigitalLinkRequest {
    pub fn new(domain: impl Into<String>, gtin: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            gtin: gtin.into(),
            ..Default::default()
        }
    }

    pub fn with_serial_number(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    pub fn with_batch_lot(mut self, batch_lot: impl Into<String>) -> Self {
        self.batch_lot = Some(batch_lot.into());
        self
    }

    pub fn with_expiry_date(mut self, expiry: impl Into<String>) -> Self {
        self.expiry_date = Some(expiry.into());
        self
    }

    pub fn with_custom_ai(mut self, ai: AiValue) -> Self {
        self.custom_ais.push(ai);
        self
    }
}
