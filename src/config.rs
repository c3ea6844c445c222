//! TOML configuration.
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! [link]
//! default_domain = "https://id.example.org"
//!
//! [qr]
//! ec_level = "quartile"
//! module_size = 8
//! quiet_zone = true
//! format = "svg"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::qr::{ErrorCorrection, QrConfig, QrFormat};

/// Domain used when none is configured or given on the command line.
pub const DEFAULT_DOMAIN: &str = "https://example.com";

/// Default QR module size in pixels.
pub const DEFAULT_MODULE_SIZE: u32 = 10;

/// Largest accepted QR module size in pixels.
pub const MAX_MODULE_SIZE: u32 = 64;

/// Errors loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub link: LinkSettings,
    pub qr: QrSettings,
}

/// Link building defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkSettings {
    /// Resolver domain used when `--domain` is not given.
    pub default_domain: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            default_domain: DEFAULT_DOMAIN.to_string(),
        }
    }
}

/// QR rendering defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrSettings {
    pub ec_level: ErrorCorrection,
    pub module_size: u32,
    pub quiet_zone: bool,
    pub format: QrFormat,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            ec_level: ErrorCorrection::default(),
            module_size: DEFAULT_MODULE_SIZE,
            quiet_zone: true,
            format: QrFormat::default(),
        }
    }
}

impl QrSettings {
    pub fn to_qr_config(&self) -> QrConfig {
        QrConfig {
            ec_level: self.ec_level,
            module_size: self.module_size,
            quiet_zone: self.quiet_zone,
            format: self.format,
        }
    }
}

impl Config {
    /// Loads and validates a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.link.default_domain.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "link.default_domain must not be empty".into(),
            ));
        }

        if self.qr.module_size == 0 || self.qr.module_size > MAX_MODULE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "qr.module_size must be between 1 and {}",
                MAX_MODULE_SIZE
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TOML: &str = r#"
[link]
default_domain = "https://id.example.org"

[qr]
ec_level = "quartile"
module_size = 8
format = "svg"
"#;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.link.default_domain, "https://example.com");
        assert_eq!(config.qr.ec_level, ErrorCorrection::Medium);
        assert_eq!(config.qr.module_size, 10);
        assert!(config.qr.quiet_zone);
        assert_eq!(config.qr.format, QrFormat::Png);
    }

    #[test]
    fn test_parse_sample() {
        let config: Config = toml::from_str(SAMPLE_TOML).unwrap();
        assert_eq!(config.link.default_domain, "https://id.example.org");
        assert_eq!(config.qr.ec_level, ErrorCorrection::Quartile);
        assert_eq!(config.qr.module_size, 8);
        // Not in file, falls back to default
        assert!(config.qr.quiet_zone);
        assert_eq!(config.qr.format, QrFormat::Svg);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gs1link.toml");
        std::fs::write(&path, SAMPLE_TOML).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.qr.to_qr_config().module_size, 8);
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load_or_default(Some(Path::new("/nonexistent/gs1link.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is [[[not valid toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_empty_domain() {
        let mut config = Config::default();
        config.link.default_domain = "  ".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_module_size() {
        let mut config = Config::default();
        config.qr.module_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("module_size"));
    }

    #[test]
    fn test_validate_rejects_oversized_modules() {
        let mut config = Config::default();
        config.qr.module_size = MAX_MODULE_SIZE;
        assert!(config.validate().is_ok());

        config.qr.module_size = u32::MAX;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("between 1 and 64"));
    }

    #[test]
    fn test_load_rejects_oversized_modules() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.toml");
        std::fs::write(&path, "[qr]\nmodule_size = 4000000000").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_ec_level_rejected() {
        let result: Result<Config, _> = toml::from_str("[qr]\nec_level = \"extreme\"");
        assert!(result.is_err());
    }
}
