//! Portal configuration file.
//!
//! Read from the platform configuration folder unless a path is given:
//! - macOS: ~/Library/Application Support/com.propertyhub.Landlord-Portal/
//! - Windows: %APPDATA%/propertyhub/Landlord Portal/config/
//! - Linux: ~/.config/landlordportal/
//!
//! A missing or broken file never stops the binary; defaults are used.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use portal_core::pagination::DEFAULT_PAGE_SIZE;
use portal_model::PortalSettings;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "propertyhub";
const APP_NAME: &str = "Landlord Portal";
const CONFIG_FILENAME: &str = "portal.toml";

/// Default width of rendered tables, in columns.
pub const DEFAULT_TABLE_WIDTH: u16 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Properties per page on the list command.
    pub page_size: usize,
    pub table_width: u16,
    /// Fixed clock for license checks. The real time when absent.
    pub now: Option<DateTime<Utc>>,
    /// Starting values of the settings page.
    pub settings: PortalSettings,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            table_width: DEFAULT_TABLE_WIDTH,
            now: None,
            settings: PortalSettings::default(),
        }
    }
}

impl PortalConfig {
    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

/// Path of the configuration file in the platform folder.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Parses configuration text.
///
/// # Errors
///
/// Returns the TOML error for malformed input or mistyped fields.
pub fn parse_config(content: &str) -> Result<PortalConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Loads `explicit`, or the platform file when `None`.
///
/// Falls back to defaults, with a warning, when the file cannot be read
/// or parsed. A missing platform file is not worth a warning.
pub fn load_config(explicit: Option<&Path>) -> PortalConfig {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => {
                tracing::warn!("could not determine config path, using defaults");
                return PortalConfig::default();
            }
        },
    };

    match fs::read_to_string(&path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to parse config: {e}, using defaults");
                PortalConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            PortalConfig::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read config: {e}, using defaults");
            PortalConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(parse_config("").unwrap(), PortalConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config(
            r#"
page_size = 2
now = "2025-06-05T09:00:00Z"

[settings.business]
currency = "EUR"
"#,
        )
        .unwrap();
        assert_eq!(config.page_size, 2);
        assert_eq!(config.table_width, DEFAULT_TABLE_WIDTH);
        assert_eq!(
            config.now(),
            Utc.with_ymd_and_hms(2025, 6, 5, 9, 0, 0).unwrap()
        );
        assert_eq!(config.settings.business.currency, "EUR");
        assert_eq!(config.settings.business.late_fee_amount, 50);
    }

    #[test]
    fn mistyped_field_is_an_error() {
        assert!(parse_config("page_size = \"six\"").is_err());
    }
}
