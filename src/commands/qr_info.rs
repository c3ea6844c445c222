//! QR code capacity info command.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use gs1link::qr::{qr_capacity_info, ErrorCorrection};
use gs1link::Config;

use super::CommandExecutor;

/// Show the QR code size a link needs.
#[derive(Args, Debug)]
pub struct QrInfoCommand {
    /// Link to analyze - reads from stdin if not provided
    #[arg(short, long)]
    pub link: Option<String>,

    /// Error correction level (defaults to qr.ec_level from the config)
    #[arg(long, value_enum)]
    pub ec_level: Option<ErrorCorrection>,
}

impl CommandExecutor for QrInfoCommand {
    fn execute(&self, config: &Config) -> Result<()> {
        let link = match &self.link {
            Some(l) => l.clone(),
            None => {
                eprintln!("Reading link from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read link from stdin")?;
                buffer.trim().to_string()
            }
        };

        if link.is_empty() {
            anyhow::bail!("Link cannot be empty");
        }

        let ec_level = self.ec_level.unwrap_or(config.qr.ec_level);
        let info = qr_capacity_info(&link, ec_level).context("Link does not fit in a QR code")?;

        println!("QR Code Capacity Analysis");
        println!("========================");
        println!("  Link length: {} bytes", info.data_bytes);
        println!("  Error correction: {}", info.ec_level);
        println!("  QR version needed: {} (of 40)", info.qr_version);
        println!("  Symbol size: {}x{} modules", info.width_modules, info.width_modules);

        if info.qr_version <= 10 {
            println!("  Note: Small QR code, easy to scan");
        } else if info.qr_version <= 25 {
            println!("  Note: Medium QR code, should scan well");
        } else {
            println!("  Note: Large QR code, consider a shorter domain or fewer AIs");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(link: &str) -> QrInfoCommand {
        QrInfoCommand {
            link: Some(link.to_string()),
            ec_level: None,
        }
    }

    #[test]
    fn test_reports_link() {
        let result = command("https://example.com/01/12345678").execute(&Config::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_link_rejected() {
        let err = command("").execute(&Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "Link cannot be empty");
    }

    #[test]
    fn test_oversized_link_rejected() {
        let link = format!("https://example.com/01/12345678/90/{}", "x".repeat(5000));
        let mut cmd = command(&link);
        cmd.ec_level = Some(ErrorCorrection::High);

        let err = cmd.execute(&Config::default()).unwrap_err();
        assert!(err.to_string().contains("does not fit"));
    }
}
