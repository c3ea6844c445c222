//! GTIN validation.
//!
//! Only the digit characters of the input count, so separators such as
//! `1234-5678` are accepted. Length is checked against the four GS1 forms;
//! the check digit is not verified.

use std::fmt;

use super::encoder::EncodeError;

/// The GS1 GTIN length forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GtinFormat {
    Gtin8,
    Gtin12,
    Gtin13,
    Gtin14,
}

impl GtinFormat {
    fn from_len(len: usize) -> Option<Self> {
        match len {
            8 => Some(Self::Gtin8),
            12 => Some(Self::Gtin12),
            13 => Some(Self::Gtin13),
            14 => Some(Self::Gtin14),
            _ => None,
        }
    }

    /// Number of digits in this form.
    pub fn digit_count(self) -> usize {
        match self {
            Self::Gtin8 => 8,
            Self::Gtin12 => 12,
            Self::Gtin13 => 13,
            Self::Gtin14 => 14,
        }
    }
}

impl fmt::Display for GtinFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GTIN-{}", self.digit_count())
    }
}

/// A GTIN reduced to its digits with a valid length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gtin {
    digits: String,
    format: GtinFormat,
}

impl Gtin {
    /// Strips non-digits from `input` and checks the remaining length.
    pub fn parse(input: &str) -> Result<Self, EncodeError> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();

        if digits.is_empty() {
            return Err(EncodeError::MissingGtin);
        }

        let format = GtinFormat::from_len(digits.len())
            .ok_or(EncodeError::InvalidGtinLength { len: digits.len() })?;

        Ok(Self { digits, format })
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn format(&self) -> GtinFormat {
        self.format
    }
}

impl fmt::Display for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}
