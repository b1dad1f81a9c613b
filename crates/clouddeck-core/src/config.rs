//! Drive configuration types.

use std::path::PathBuf;

use compact_str::CompactString;
use derive_builder::Builder;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::entry::format_size;
use crate::error::TreeError;
use crate::sample;
use crate::store::TreeStore;

/// Storage usage shown next to the drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageQuota {
    /// Bytes in use.
    pub used: u64,
    /// Bytes available in total.
    pub total: u64,
}

impl Default for StorageQuota {
    fn default() -> Self {
        Self::new(6_800_000_000, 15_000_000_000)
    }
}

impl StorageQuota {
    /// Create a quota.
    pub fn new(used: u64, total: u64) -> Self {
        Self { used, total }
    }

    /// Fraction used, clamped to `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.used as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    /// Whole percentage used.
    pub fn percent(&self) -> u16 {
        (self.ratio() * 100.0).round() as u16
    }

    /// Human-readable usage line.
    pub fn describe(&self) -> String {
        format!("{} of {} used", format_size(self.used), format_size(self.total))
    }
}

/// Configuration for a drive session.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct DriveConfig {
    /// Label of the root breadcrumb.
    #[builder(default = "default_root_label()")]
    #[serde(default = "default_root_label", deserialize_with = "deserialize_root_label")]
    pub root_label: CompactString,

    /// Storage usage to display.
    #[builder(default)]
    #[serde(default, deserialize_with = "deserialize_quota")]
    pub quota: StorageQuota,

    /// JSON tree to load instead of the built-in sample.
    #[builder(default)]
    #[serde(default)]
    pub tree_path: Option<PathBuf>,
}

fn default_root_label() -> CompactString {
    CompactString::from("My Drive")
}

fn check_root_label(label: &str) -> Result<(), String> {
    if label.trim().is_empty() {
        return Err("Root label cannot be empty".to_string());
    }
    Ok(())
}

fn check_quota(quota: &StorageQuota) -> Result<(), String> {
    if quota.total == 0 {
        return Err("Quota total must be greater than zero".to_string());
    }
    Ok(())
}

// Settings files bypass the builder, so deserialization runs the same checks.
fn deserialize_root_label<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<CompactString, D::Error> {
    let label = CompactString::deserialize(deserializer)?;
    check_root_label(&label).map_err(de::Error::custom)?;
    Ok(label)
}

fn deserialize_quota<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<StorageQuota, D::Error> {
    let quota = StorageQuota::deserialize(deserializer)?;
    check_quota(&quota).map_err(de::Error::custom)?;
    Ok(quota)
}

impl DriveConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref label) = self.root_label {
            check_root_label(label)?;
        }
        if let Some(ref quota) = self.quota {
            check_quota(quota)?;
        }
        Ok(())
    }
}

impl DriveConfig {
    /// Create a new drive config builder.
    pub fn builder() -> DriveConfigBuilder {
        DriveConfigBuilder::default()
    }

    /// Load the configured tree, or the built-in sample when none is set.
    pub fn load_store(&self) -> Result<TreeStore, TreeError> {
        match &self.tree_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading drive tree");
                TreeStore::from_path(path, self.root_label.clone())
            }
            None => TreeStore::new(sample::sample_entries(), self.root_label.clone()),
        }
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            root_label: default_root_label(),
            quota: StorageQuota::default(),
            tree_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DriveConfig::builder()
            .root_label("Team Drive")
            .quota(StorageQuota::new(1, 4))
            .build()
            .unwrap();

        assert_eq!(config.root_label, "Team Drive");
        assert_eq!(config.quota.percent(), 25);
        assert!(config.tree_path.is_none());
    }

    #[test]
    fn test_config_builder_rejects_empty_label() {
        assert!(DriveConfig::builder().root_label("  ").build().is_err());
        assert!(
            DriveConfig::builder()
                .quota(StorageQuota::new(0, 0))
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_default_quota() {
        let quota = StorageQuota::default();
        assert_eq!(quota.percent(), 45);
        assert_eq!(StorageQuota::new(20, 10).ratio(), 1.0);
        assert_eq!(StorageQuota::new(5, 0).ratio(), 0.0);
    }

    #[test]
    fn test_default_loads_sample() {
        let store = DriveConfig::default().load_store().unwrap();
        assert_eq!(store.root_label(), "My Drive");
        assert_eq!(store.root().len(), 6);
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config: DriveConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DriveConfig::default());
    }

    #[test]
    fn test_config_from_json_validates() {
        let err = serde_json::from_str::<DriveConfig>(r#"{"root_label": "  "}"#).unwrap_err();
        assert!(err.to_string().contains("Root label cannot be empty"));

        let err = serde_json::from_str::<DriveConfig>(r#"{"quota": {"used": 1, "total": 0}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Quota total must be greater than zero"));
    }
}
