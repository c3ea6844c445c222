//! # gs1link - GS1 Digital Link generator
//!
//! Builds GS1 Digital Link URIs from product identification data and renders
//! them as QR codes.
//!
//! ## Overview
//!
//! A Digital Link expresses GS1 Application Identifiers as a web path:
//! - **01** GTIN (mandatory, 8/12/13/14 digits)
//! - **21** serial number
//! - **10** batch/lot
//! - **17** expiry date (YYMMDD)
//! - any further `AI/value` pairs, in the order given
//!
//! Values are percent-encoded; malformed optional fields are dropped rather
//! than rejected. Only a missing or wrong-length GTIN fails.
//!
//! ## Example Usage
//!
//! ```rust
//! use gs1link::{encode, AiValue, DigitalLinkRequest};
//!
//! let request = DigitalLinkRequest::new("https://example.com/", "12345678901231")
//!     .with_serial_number("ABC123")
//!     .with_batch_lot("LOT 2024")
//!     .with_expiry_date("251231")
//!     .with_custom_ai(AiValue::new("90", "X"));
//!
//! let link = encode(&request).unwrap();
//! assert_eq!(
//!     link.as_str(),
//!     "https://example.com/01/12345678901231/21/ABC123/10/LOT%202024/17/251231/90/X"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`link`]: Digital Link encoding and GTIN validation
//! - [`qr`]: QR code generation and reading
//! - [`config`]: TOML configuration
//! - [`notice`]: user feedback sinks
//! - [`clipboard`]: copying the link to the clipboard

pub mod clipboard;
pub mod config;
pub mod link;
pub mod notice;
pub mod qr;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardError, ClipboardWriter, SystemClipboard};
pub use config::{Config, ConfigError};
pub use link::{
    encode, percent_encode, AiValue, DigitalLink, DigitalLinkRequest, DigitalLinkResult,
    EncodeError, Gtin, GtinFormat,
};
pub use notice::{ConsoleSink, NotificationSink, Severity};
pub use qr::{generate_qr, generate_qr_to_file, read_qr, ErrorCorrection, QrConfig, QrError, QrFormat};
