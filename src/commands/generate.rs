//! Generate command - build a Digital Link and optionally export its QR code.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use gs1link::link::ai_label;
use gs1link::qr::{generate_qr, generate_qr_to_file, ErrorCorrection, QrFormat, QrOutput};
use gs1link::{
    encode, AiValue, ClipboardWriter, Config, ConsoleSink, DigitalLink, DigitalLinkRequest,
    NotificationSink, SystemClipboard,
};

use super::{CommandExecutor, ReportedError};

/// Build a GS1 Digital Link from product identifiers.
///
/// The link is printed on stdout. Notices go to stderr.
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Resolver domain (defaults to link.default_domain from the config)
    #[arg(short, long)]
    pub domain: Option<String>,

    /// GTIN (8, 12, 13 or 14 digits; separators are ignored)
    #[arg(short, long)]
    pub gtin: String,

    /// Serial number (AI 21)
    #[arg(short, long)]
    pub serial: Option<String>,

    /// Batch/lot number (AI 10)
    #[arg(short, long)]
    pub batch: Option<String>,

    /// Expiry date as YYMMDD (AI 17); other lengths are omitted
    #[arg(short, long)]
    pub expiry: Option<String>,

    /// Additional AI as CODE=VALUE (repeatable, emitted in order)
    #[arg(long = "ai", value_name = "CODE=VALUE")]
    pub custom_ais: Vec<AiValue>,

    /// Write a QR code of the link to this path
    #[arg(long)]
    pub qr: Option<PathBuf>,

    /// QR code format (defaults to qr.format from the config)
    #[arg(long, value_enum)]
    pub qr_format: Option<QrFormat>,

    /// QR error correction level (defaults to qr.ec_level from the config)
    #[arg(long, value_enum)]
    pub ec_level: Option<ErrorCorrection>,

    /// Copy the link to the clipboard (a failure is reported but not fatal)
    #[arg(long)]
    pub copy: bool,

    /// Print the QR code to the terminal
    #[arg(long)]
    pub show_qr: bool,

    /// List each segment with its meaning on stderr
    #[arg(long)]
    pub explain: bool,
}

impl GenerateCommand {
    fn request(&self, config: &Config) -> DigitalLinkRequest {
        DigitalLinkRequest {
            domain: self
                .domain
                .clone()
                .unwrap_or_else(|| config.link.default_domain.clone()),
            gtin: self.gtin.clone(),
            serial_number: self.serial.clone(),
            batch_lot: self.batch.clone(),
            expiry_date: self.expiry.clone(),
            custom_ais: self.custom_ais.clone(),
        }
    }

    /// Builds the link, writes the QR file and copies the link, reporting through `sink`.
    ///
    /// Failures are returned as [`ReportedError`] once the sink has shown them.
    fn run(
        &self,
        config: &Config,
        sink: &dyn NotificationSink,
        clipboard: &dyn ClipboardWriter,
    ) -> Result<DigitalLink> {
        let link = match encode(&self.request(config)) {
            Ok(link) => link,
            Err(e) => {
                let message = e.to_string();
                sink.error(&message);
                return Err(ReportedError(message).into());
            }
        };
        sink.success("GS1 Digital Link generated");

        if let Some(path) = &self.qr {
            let mut qr_config = config.qr.to_qr_config();
            if let Some(format) = self.qr_format {
                qr_config.format = format;
            }
            if let Some(level) = self.ec_level {
                qr_config.ec_level = level;
            }

            if let Err(e) = generate_qr_to_file(link.as_str(), path, &qr_config) {
                let message = format!("Failed to save QR code to {}: {}", path.display(), e);
                sink.error(&message);
                return Err(ReportedError(message).into());
            }
            info!(path = %path.display(), format = %qr_config.format, "QR code saved");
            sink.success(&format!("QR code saved to {}", path.display()));
        }

        if self.copy {
            match clipboard.write_text(link.as_str()) {
                Ok(()) => sink.success("Link copied to clipboard"),
                Err(e) => {
                    warn!(error = %e, "Clipboard copy failed");
                    sink.error("Failed to copy link");
                }
            }
        }

        Ok(link)
    }
}

impl CommandExecutor for GenerateCommand {
    fn execute(&self, config: &Config) -> Result<()> {
        let link = self.run(config, &ConsoleSink, &SystemClipboard)?;

        println!("{}", link);

        if self.explain {
            eprintln!();
            eprintln!("Segments:");
            for (code, value) in link.segments() {
                let label = ai_label(code).unwrap_or("Custom AI");
                eprintln!("  ({}) {:<22} {}", code, label, value);
            }
        }

        if self.show_qr {
            let qr_config = gs1link::QrConfig {
                format: QrFormat::Ascii,
                ec_level: self.ec_level.unwrap_or(config.qr.ec_level),
                ..config.qr.to_qr_config()
            };
            if let QrOutput::Ascii(ascii) =
                generate_qr(link.as_str(), &qr_config).context("Failed to render QR code")?
            {
                eprintln!("{}", ascii);
            }
        }

        Ok(())
    }
}
