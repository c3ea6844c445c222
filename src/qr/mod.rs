//! QR code rendering and reading for Digital Links.
//!
//! The QR payload is the plain URI, so any phone camera or GS1 resolver
//! scanning it lands on the link directly.

mod generator;
mod reader;

pub use generator::{
    generate_qr, generate_qr_to_file, qr_capacity_info, ErrorCorrection, QrCapacityInfo, QrConfig,
    QrError, QrFormat, QrOutput,
};
pub use reader::{read_qr, read_qr_from_file};
