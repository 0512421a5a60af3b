//! User settings, stored as TOML in the platform config directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use idb_model::Tier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub account: AccountSettings,
    pub search: SearchSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    /// Raw tier name; unknown names fall back to free limits.
    pub tier: String,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            tier: Tier::Free.as_str().to_string(),
        }
    }
}

impl AccountSettings {
    pub fn tier(&self) -> Tier {
        Tier::parse_lenient(&self.tier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub per_page: u32,
    /// Country applied when a search names none. Unset means no country filter.
    pub default_country: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            per_page: idb_filter::search::DEFAULT_PER_PAGE,
            default_country: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON industry catalog replacing the built-in one.
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::config_path()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse settings {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, content).with_context(|| format!("write settings {}", path.display()))
    }

    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "IndustryDB", "idb")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("[account]\ntier = \"pro\"\n").unwrap();
        assert_eq!(settings.account.tier(), Tier::Pro);
        assert_eq!(settings.search.per_page, 25);
        assert_eq!(settings.catalog.path, None);
    }

    #[test]
    fn defaults_have_no_country_filter() {
        let settings = Settings::default();
        assert_eq!(settings.account.tier(), Tier::Free);
        assert_eq!(settings.search.per_page, 25);
        assert_eq!(settings.search.default_country, None);
    }

    #[test]
    fn unknown_tier_reads_as_free() {
        let settings: Settings = toml::from_str("[account]\ntier = \"diamond\"\n").unwrap();
        assert_eq!(settings.account.tier(), Tier::Free);
    }
}
