//! QR code reading.
//!
//! Used to check that an exported image scans back to the expected link.

use image::DynamicImage;
use rqrr::PreparedImage;
use std::path::Path;

use super::QrError;

/// Reads the first QR code in an image and returns its text payload.
pub fn read_qr(image: &DynamicImage) -> Result<String, QrError> {
    // Convert to grayscale for QR detection
    let gray = image.to_luma8();
    let mut prepared = PreparedImage::prepare(gray);
    let grids = prepared.detect_grids();

    let grid = grids.first().ok_or(QrError::NoQrCodeFound)?;
    let (_, content) = grid
        .decode()
        .map_err(|e| QrError::QrReadError(format!("Failed to decode QR: {:?}", e)))?;

    Ok(content)
}

/// Reads the first QR code from an image file.
pub fn read_qr_from_file<P: AsRef<Path>>(path: P) -> Result<String, QrError> {
    let image = image::open(path).map_err(|e| QrError::QrReadError(e.to_string()))?;

    read_qr(&image)
}

#[cfg(test)]
mod tests {
    use super::super::generator::{generate_qr, QrConfig};
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_read_qr_roundtrip() {
        let link = "https://example.com/01/12345678901231/10/LOT%202024";
        let output = generate_qr(link, &QrConfig::default()).unwrap();
        let image = output.into_image().unwrap();

        assert_eq!(read_qr(&image).unwrap(), link);
    }

    #[test]
    fn test_blank_image_has_no_qr() {
        let blank = DynamicImage::ImageLuma8(GrayImage::from_pixel(200, 200, Luma([255u8])));
        assert!(matches!(read_qr(&blank), Err(QrError::NoQrCodeFound)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_qr_from_file("/nonexistent/qr.png").unwrap_err();
        assert!(matches!(err, QrError::QrReadError(_)));
    }
}
