//! QR code generation from Digital Link URIs.

use std::fmt;
use std::path::Path;

use image::{DynamicImage, Luma};
use qrcode::render::svg;
use qrcode::types::QrError as QrCodeError;
use qrcode::{EcLevel, QrCode, Version};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during QR code operations.
#[derive(Error, Debug)]
pub enum QrError {
    #[error("Data too large for QR code: {size} bytes")]
    DataTooLarge { size: usize },

    #[error("QR code generation failed: {0}")]
    QrGenerationError(String),

    #[error("Image save error: {0}")]
    ImageSaveError(String),

    #[error("QR code read error: {0}")]
    QrReadError(String),

    #[error("No QR code found in image")]
    NoQrCodeFound,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// QR error correction level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    /// ~7% recovery
    Low,
    /// ~15% recovery
    #[default]
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::Low => "L",
            Self::Medium => "M",
            Self::Quartile => "Q",
            Self::High => "H",
        };
        f.write_str(letter)
    }
}

/// Output format for QR codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QrFormat {
    /// PNG image (default)
    #[default]
    Png,
    /// SVG vector image
    Svg,
    /// ASCII art (for terminal display)
    Ascii,
}

impl fmt::Display for QrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Ascii => "ascii",
        };
        f.write_str(name)
    }
}

/// Configuration for QR code generation.
#[derive(Debug, Clone)]
pub struct QrConfig {
    /// Error correction level (default: Medium)
    pub ec_level: ErrorCorrection,
    /// Module size in pixels (default: 10)
    pub module_size: u32,
    /// Whether to draw the quiet zone border (default: true)
    pub quiet_zone: bool,
    /// Output format
    pub format: QrFormat,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            ec_level: ErrorCorrection::Medium,
            module_size: 10,
            quiet_zone: true,
            format: QrFormat::Png,
        }
    }
}

/// Output from QR code generation.
pub enum QrOutput {
    /// PNG/image output
    Image(DynamicImage),
    /// SVG string output
    Svg(String),
    /// ASCII art output
    Ascii(String),
}

impl QrOutput {
    /// Returns true if this is an image output.
    pub fn is_image(&self) -> bool {
        matches!(self, QrOutput::Image(_))
    }

    /// Returns the image if this is an image output.
    pub fn into_image(self) -> Option<DynamicImage> {
        match self {
            QrOutput::Image(img) => Some(img),
            _ => None,
        }
    }

    /// Returns the string content (for SVG or ASCII).
    pub fn as_string(&self) -> Option<&str> {
        match self {
            QrOutput::Svg(s) | QrOutput::Ascii(s) => Some(s),
            _ => None,
        }
    }
}

fn build_code(text: &str, ec_level: ErrorCorrection) -> Result<QrCode, QrError> {
    QrCode::with_error_correction_level(text, ec_level.into()).map_err(|e| match e {
        QrCodeError::DataTooLong => QrError::DataTooLarge { size: text.len() },
        other => QrError::QrGenerationError(other.to_string()),
    })
}

/// Renders `text` (normally a Digital Link URI) as a QR code.
pub fn generate_qr(text: &str, config: &QrConfig) -> Result<QrOutput, QrError> {
    let qr = build_code(text, config.ec_level)?;
    debug!(len = text.len(), ec = %config.ec_level, format = %config.format, "Rendering QR code");

    match config.format {
        QrFormat::Png => {
            let image = qr
                .render::<Luma<u8>>()
                .min_dimensions(100, 100)
                .quiet_zone(config.quiet_zone)
                .module_dimensions(config.module_size, config.module_size)
                .build();

            Ok(QrOutput::Image(DynamicImage::ImageLuma8(image)))
        }
        QrFormat::Svg => {
            let svg_string = qr
                .render()
                .min_dimensions(200, 200)
                .quiet_zone(config.quiet_zone)
                .dark_color(svg::Color("#000000"))
                .light_color(svg::Color("#ffffff"))
                .build();

            Ok(QrOutput::Svg(svg_string))
        }
        QrFormat::Ascii => {
            let ascii = qr
                .render::<char>()
                .quiet_zone(config.quiet_zone)
                .module_dimensions(2, 1)
                .build();

            Ok(QrOutput::Ascii(ascii))
        }
    }
}

/// Renders a QR code and writes it to `path`.
pub fn generate_qr_to_file<P: AsRef<Path>>(
    text: &str,
    path: P,
    config: &QrConfig,
) -> Result<(), QrError> {
    let output = generate_qr(text, config)?;
    let path = path.as_ref();

    match output {
        QrOutput::Image(img) => {
            img.save_with_format(path, image::ImageFormat::Png)
                .map_err(|e| QrError::ImageSaveError(e.to_string()))?;
        }
        QrOutput::Svg(svg) => {
            std::fs::write(path, svg)?;
        }
        QrOutput::Ascii(ascii) => {
            std::fs::write(path, ascii)?;
        }
    }

    Ok(())
}

/// Size of the QR symbol needed for some text.
#[derive(Debug, Clone)]
pub struct QrCapacityInfo {
    /// Payload size in bytes
    pub data_bytes: usize,
    /// QR version (1-40)
    pub qr_version: i16,
    /// Symbol width in modules, without quiet zone
    pub width_modules: usize,
    /// Error correction level used
    pub ec_level: ErrorCorrection,
}

/// Computes the smallest QR version that holds `text` at the given level.
pub fn qr_capacity_info(text: &str, ec_level: ErrorCorrection) -> Result<QrCapacityInfo, QrError> {
    let qr = build_code(text, ec_level)?;
    let qr_version = match qr.version() {
        Version::Normal(v) | Version::Micro(v) => v,
    };

    Ok(QrCapacityInfo {
        data_bytes: text.len(),
        qr_version,
        width_modules: qr.width(),
        ec_level,
    })
}
