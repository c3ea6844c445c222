//! QR code reading command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use gs1link::qr::read_qr_from_file;
use gs1link::Config;

use super::CommandExecutor;

/// Read a QR code image and print the link it contains.
#[derive(Args, Debug)]
pub struct QrReadCommand {
    /// Path to image containing the QR code
    #[arg(short, long)]
    pub input: PathBuf,
}

impl CommandExecutor for QrReadCommand {
    fn execute(&self, _config: &Config) -> Result<()> {
        let content = read_qr_from_file(&self.input)
            .with_context(|| format!("Failed to read QR code from {}", self.input.display()))?;

        println!("{}", content);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs1link::qr::{generate_qr_to_file, QrConfig};

    #[test]
    fn test_reads_exported_qr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("link.png");
        generate_qr_to_file("https://example.com/01/12345678", &path, &QrConfig::default()).unwrap();

        let cmd = QrReadCommand { input: path };
        assert!(cmd.execute(&Config::default()).is_ok());
    }

    #[test]
    fn test_missing_image() {
        let cmd = QrReadCommand {
            input: PathBuf::from("/nonexistent/link.png"),
        };
        let err = cmd.execute(&Config::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read QR code from"));
    }
}
