//! gs1link - GS1 Digital Link generator
//!
//! A CLI tool that builds GS1 Digital Link URIs from product identifiers
//! and exports them as QR codes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gs1link::Config;

mod commands;

use commands::{CommandExecutor, GenerateCommand, QrInfoCommand, QrReadCommand, ReportedError};

/// gs1link - GS1 Digital Link generator
///
/// Builds Digital Link URIs (GTIN, serial, batch/lot, expiry and custom AIs)
/// and renders them as scannable QR codes.
#[derive(Parser)]
#[command(name = "gs1link")]
#[command(version)]
#[command(about = "Build GS1 Digital Link URIs and QR codes")]
#[command(long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "GS1LINK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a Digital Link (and optionally its QR code)
    Generate(GenerateCommand),

    /// Read a QR code image and print its link
    #[command(name = "qr-read")]
    QrRead(QrReadCommand),

    /// Show the QR code size a link needs
    #[command(name = "qr-info")]
    QrInfo(QrInfoCommand),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let command: &dyn CommandExecutor = match &cli.command {
        Commands::Generate(cmd) => cmd,
        Commands::QrRead(cmd) => cmd,
        Commands::QrInfo(cmd) => cmd,
    };

    match command.execute(&config) {
        Ok(()) => Ok(()),
        Err(e) if e.is::<ReportedError>() => std::process::exit(1),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "gs1link",
            "generate",
            "--gtin",
            "12345678901231",
            "--serial",
            "ABC123",
            "--ai",
            "90=X",
            "--ai",
            "91=Y",
            "--ec-level",
            "high",
            "--copy",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.gtin, "12345678901231");
                assert_eq!(cmd.serial.as_deref(), Some("ABC123"));
                assert_eq!(cmd.custom_ais.len(), 2);
                assert_eq!(cmd.custom_ais[1].code, "91");
                assert_eq!(cmd.ec_level, Some(gs1link::ErrorCorrection::High));
                assert!(cmd.copy);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_ai() {
        let result = Cli::try_parse_from(["gs1link", "generate", "--gtin", "12345678", "--ai", "90X"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_gtin_is_required() {
        assert!(Cli::try_parse_from(["gs1link", "generate"]).is_err());
    }
}
