//! One module per portal page.

pub mod billing;
pub mod dashboard;
pub mod license;
pub mod payments;
pub mod profile;
pub mod properties;
pub mod reports;
pub mod settings;
pub mod subscription;
pub mod team;
pub mod tenants;

use serde::{Deserialize, Serialize};

/// Card grid or one-row-per-item list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(format!("unknown view mode {other:?}, expected grid or list")),
        }
    }
}
