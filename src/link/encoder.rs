//! Digital Link encoding.
//!
//! The encoder:
//! 1. Validates the GTIN (digits only, 8/12/13/14 long)
//! 2. Trims one trailing `/` from the domain
//! 3. Appends `/01/<gtin>`
//! 4. Appends serial (21), batch/lot (10) and expiry (17) when present
//! 5. Appends complete custom AIs in the order given
//!
//! Malformed optional fields are dropped, never reported as errors.

use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

use thiserror::Error;
use tracing::debug;

use super::ai::{AI_BATCH_LOT, AI_EXPIRY, AI_GTIN, AI_SERIAL};
use super::gtin::Gtin;
use super::request::DigitalLinkRequest;

/// Length of a YYMMDD date.
const EXPIRY_LEN: usize = 6;

/// Validation failures. Nothing is emitted when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("GTIN is required to build a Digital Link")]
    MissingGtin,

    #[error("GTIN must have 8, 12, 13 or 14 digits, got {len}")]
    InvalidGtinLength { len: usize },
}

/// Outcome of [`encode`].
pub type DigitalLinkResult = Result<DigitalLink, EncodeError>;

/// A finished Digital Link URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalLink {
    uri: String,
    /// Byte offset of the `/01/` segment.
    path_start: usize,
    /// Byte ranges of each `(code, value)` pair within `uri`.
    segments: Vec<(Range<usize>, Range<usize>)>,
}

impl DigitalLink {
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    pub fn into_string(self) -> String {
        self.uri
    }

    /// The domain part, without trailing slash.
    pub fn domain(&self) -> &str {
        &self.uri[..self.path_start]
    }

    /// `(ai, value)` pairs after the domain, in emission order. Values stay encoded.
    ///
    /// Pairs are recorded while building, so a custom code containing `/`
    /// still comes back as one code.
    pub fn segments(&self) -> Vec<(&str, &str)> {
        self.segments
            .iter()
            .map(|(code, value)| (&self.uri[code.clone()], &self.uri[value.clone()]))
            .collect()
    }
}

impl fmt::Display for DigitalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

impl AsRef<str> for DigitalLink {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

impl From<DigitalLink> for String {
    fn from(link: DigitalLink) -> Self {
        link.uri
    }
}

/// URI component encoding: only `A-Z a-z 0-9 - _ . ~` are left as is.
pub fn percent_encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Reduces an expiry date to its digits, returning them only if there are exactly six.
pub fn normalize_expiry(date: &str) -> Option<String> {
    let digits: String = date.chars().filter(char::is_ascii_digit).collect();
    (digits.len() == EXPIRY_LEN).then_some(digits)
}

/// Builds the Digital Link for `request`.
///
/// # Errors
/// [`EncodeError::MissingGtin`] when the GTIN has no digits,
/// [`EncodeError::InvalidGtinLength`] when the digit count is not a GTIN form.
pub fn encode(request: &DigitalLinkRequest) -> DigitalLinkResult {
    let gtin = Gtin::parse(&request.gtin)?;

    let domain = request
        .domain
        .strip_suffix('/')
        .unwrap_or(&request.domain);

    let mut link = LinkBuilder::new(domain);

    link.push_segment(AI_GTIN, gtin.as_str());

    if let Some(serial) = non_empty(&request.serial_number) {
        link.push_segment(AI_SERIAL, &percent_encode(serial));
    }

    if let Some(batch_lot) = non_empty(&request.batch_lot) {
        link.push_segment(AI_BATCH_LOT, &percent_encode(batch_lot));
    }

    if let Some(expiry) = non_empty(&request.expiry_date) {
        match normalize_expiry(expiry) {
            Some(date) => link.push_segment(AI_EXPIRY, &date),
            None => debug!(expiry, "Expiry date is not YYMMDD, omitting AI 17"),
        }
    }

    for ai in &request.custom_ais {
        if ai.is_complete() {
            link.push_segment(&ai.code, &percent_encode(&ai.value));
        } else {
            debug!(code = %ai.code, "Skipping incomplete custom AI");
        }
    }

    let link = link.finish();
    debug!(uri = %link.uri, format = %gtin.format(), "Digital Link built");

    Ok(link)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

struct LinkBuilder {
    uri: String,
    path_start: usize,
    segments: Vec<(Range<usize>, Range<usize>)>,
}

impl LinkBuilder {
    fn new(domain: &str) -> Self {
        let mut uri = String::with_capacity(domain.len() + 64);
        uri.push_str(domain);
        Self {
            path_start: uri.len(),
            uri,
            segments: Vec::new(),
        }
    }

    fn push_segment(&mut self, code: &str, value: &str) {
        self.uri.push('/');
        let code_start = self.uri.len();
        self.uri.push_str(code);
        let code_range = code_start..self.uri.len();

        self.uri.push('/');
        let value_start = self.uri.len();
        self.uri.push_str(value);
        let value_range = value_start..self.uri.len();

        self.segments.push((code_range, value_range));
    }

    fn finish(self) -> DigitalLink {
        DigitalLink {
            uri: self.uri,
            path_start: self.path_start,
            segments: self.segments,
        }
    }
}
