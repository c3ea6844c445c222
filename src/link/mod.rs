//! GS1 Digital Link URI construction.
//!
//! A Digital Link carries GS1 Application Identifiers (AIs) as path segments
//! under a resolver domain:
//!
//! ```text
//! https://example.com/01/12345678901231/21/ABC123/10/LOT2024001/17/251231
//! ```
//!
//! The GTIN segment (`/01/`) is mandatory. Serial number (`21`), batch/lot
//! (`10`), expiry date (`17`) and any custom AIs follow in that fixed order.
//! Encoding is one-way and pure: every call is independent.

mod ai;
mod encoder;
mod gtin;
mod request;

pub use ai::{ai_label, AiParseError, AiValue, AI_BATCH_LOT, AI_EXPIRY, AI_GTIN, AI_SERIAL};
pub use encoder::{encode, normalize_expiry, percent_encode, DigitalLink, DigitalLinkResult, EncodeError};
pub use gtin::{Gtin, GtinFormat};
pub use request::DigitalLinkRequest;
