use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Ids treated as waterlogged even without a `waterlogged` property.
/// Matches the vanilla plants that always render submerged.
const DEFAULT_WATERLOGGED_IDS: [&str; 3] = [
    "minecraft:seagrass",
    "minecraft:tall_seagrass",
    "minecraft:kelp",
];

/// Ids whose blocks count as open space for surface-height averaging.
const DEFAULT_AIR_IDS: [&str; 3] = ["minecraft:air", "minecraft:cave_air", "minecraft:void_air"];

/// TOML-facing liquid configuration.
///
/// ```toml
/// waterlogged_ids = ["minecraft:seagrass", "minecraft:kelp"]
/// air_ids = ["minecraft:air"]
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LiquidsConfig {
    #[serde(default)]
    pub waterlogged_ids: Option<Vec<String>>,
    #[serde(default)]
    pub air_ids: Option<Vec<String>>,
}

impl LiquidsConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

/// Compiled id sets used by the classifier. Built once, then shared
/// read-only across builder invocations.
#[derive(Clone, Debug)]
pub struct LiquidCatalog {
    waterlogged: HashSet<String>,
    airs: HashSet<String>,
}

impl LiquidCatalog {
    pub fn from_config(cfg: &LiquidsConfig) -> Self {
        let defaults = Self::default();
        let waterlogged = match &cfg.waterlogged_ids {
            Some(ids) => ids.iter().cloned().collect(),
            None => defaults.waterlogged,
        };
        let airs = match &cfg.air_ids {
            Some(ids) => ids.iter().cloned().collect(),
            None => defaults.airs,
        };
        Self { waterlogged, airs }
    }

    /// True if the full id is in the always-waterlogged set.
    #[inline]
    pub fn is_waterlogged_id(&self, full_id: &str) -> bool {
        self.waterlogged.contains(full_id)
    }

    /// True if the full id belongs to the air family.
    #[inline]
    pub fn is_air_id(&self, full_id: &str) -> bool {
        self.airs.contains(full_id)
    }
}

impl Default for LiquidCatalog {
    fn default() -> Self {
        Self {
            waterlogged: DEFAULT_WATERLOGGED_IDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            airs: DEFAULT_AIR_IDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_vanilla_sets() {
        let cat = LiquidCatalog::default();
        assert!(cat.is_waterlogged_id("minecraft:seagrass"));
        assert!(cat.is_waterlogged_id("minecraft:tall_seagrass"));
        assert!(cat.is_waterlogged_id("minecraft:kelp"));
        assert!(!cat.is_waterlogged_id("minecraft:stone"));
        assert!(cat.is_air_id("minecraft:air"));
        assert!(cat.is_air_id("minecraft:cave_air"));
        assert!(!cat.is_air_id("minecraft:water"));
    }

    #[test]
    fn toml_overrides_replace_defaults() {
        let cfg = LiquidsConfig::from_toml_str(
            r#"
            waterlogged_ids = ["mymod:reed"]
        "#,
        )
        .unwrap();
        let cat = LiquidCatalog::from_config(&cfg);
        assert!(cat.is_waterlogged_id("mymod:reed"));
        assert!(!cat.is_waterlogged_id("minecraft:seagrass"));
        // air_ids untouched -> defaults kept
        assert!(cat.is_air_id("minecraft:air"));
    }

    #[test]
    fn empty_toml_keeps_defaults() {
        let cfg = LiquidsConfig::from_toml_str("").unwrap();
        let cat = LiquidCatalog::from_config(&cfg);
        assert!(cat.is_waterlogged_id("minecraft:kelp"));
        assert!(cat.is_air_id("minecraft:void_air"));
    }
}
