//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod generate;
mod qr_info;
mod qr_read;

pub use generate::GenerateCommand;
pub use qr_info::QrInfoCommand;
pub use qr_read::QrReadCommand;

use anyhow::Result;
use thiserror::Error;

use gs1link::Config;

/// A failure already shown to the user through a notification sink.
///
/// `main` exits non-zero without printing it again.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ReportedError(pub String);

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments and the loaded configuration.
    fn execute(&self, config: &Config) -> Result<()>;
}
