use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Average lengths of the variable-size parts of an outlet record.
///
/// Each average is jittered per outlet before use. Zero disables that
/// sub-collection. Keys are camelCase (`averageNumberOfOrders`, `averageNews`, ...)
/// and keys omitted from a YAML profile read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingConfig {
    #[serde(default)]
    pub average_notes_list: u32,
    #[serde(default)]
    pub average_visit_history: u32,
    #[serde(default)]
    pub average_number_of_orders: u32,
    #[serde(default)]
    pub average_order_items_per_order: u32,
    #[serde(default)]
    pub average_top_products_in_statistics: u32,
    #[serde(default)]
    pub average_outlets_nearby: u32,
    #[serde(default)]
    pub average_asset_list: u32,
    #[serde(default)]
    pub average_checklist: u32,
    #[serde(default)]
    pub average_news: u32,
}

impl SizingConfig {
    /// Production-sized payloads. The server uses this unless a profile file is configured.
    #[must_use]
    pub const fn baseline() -> Self {
        Self {
            average_notes_list: 30,
            average_visit_history: 96,
            average_number_of_orders: 90,
            average_order_items_per_order: 20,
            average_top_products_in_statistics: 6,
            average_outlets_nearby: 10,
            average_asset_list: 6,
            average_checklist: 18,
            average_news: 22,
        }
    }

    /// Small payloads for fixtures and quick manual checks.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            average_notes_list: 2,
            average_visit_history: 3,
            average_number_of_orders: 5,
            average_order_items_per_order: 2,
            average_top_products_in_statistics: 5,
            average_outlets_nearby: 3,
            average_asset_list: 2,
            average_checklist: 4,
            average_news: 3,
        }
    }

    /// Every sub-collection disabled.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            average_notes_list: 0,
            average_visit_history: 0,
            average_number_of_orders: 0,
            average_order_items_per_order: 0,
            average_top_products_in_statistics: 0,
            average_outlets_nearby: 0,
            average_asset_list: 0,
            average_checklist: 0,
            average_news: 0,
        }
    }

    /// Look up a named profile: `baseline`, `compact` or `disabled`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownProfile`] for any other name.
    pub fn from_profile(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "compact" => Ok(Self::compact()),
            "disabled" => Ok(Self::disabled()),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

/// Load a sizing profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub fn load_sizing(path: &Path) -> Result<SizingConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SizingFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_yaml::from_str(&content).map_err(ConfigError::SizingFileParse)
}

/// Pick the sizing to use: a YAML file if given, else a named profile, else
/// [`SizingConfig::baseline`].
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be loaded or the profile is unknown.
pub fn resolve_sizing(
    path: Option<&Path>,
    profile: Option<&str>,
) -> Result<SizingConfig, ConfigError> {
    match (path, profile) {
        (Some(path), _) => load_sizing(path),
        (None, Some(name)) => SizingConfig::from_profile(name),
        (None, None) => Ok(SizingConfig::baseline()),
    }
}
