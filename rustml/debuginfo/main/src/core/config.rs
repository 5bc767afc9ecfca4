//! Tiling configuration for the reference accelerator backend.

use crate::api::error::{DebugInfoError, DebugInfoResult};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// How the accelerator pads and orders tensor buffers.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AcceleratorConfig {
    /// Tile size of the minor-most physical dimension.
    #[serde(default = "default_minor_tile")]
    pub minor_tile: i64,
    /// Tile size of the second minor-most physical dimension.
    #[serde(default = "default_second_minor_tile")]
    pub second_minor_tile: i64,
    /// Store 64-bit element types as a pair of 32-bit halves.
    #[serde(default = "default_split_wide_types")]
    pub split_wide_types: bool,
    /// Physical order override, used for buffers whose rank matches its length.
    #[serde(default)]
    pub minor_to_major: Option<Vec<usize>>,
}

fn default_minor_tile() -> i64 { 128 }
fn default_second_minor_tile() -> i64 { 8 }
fn default_split_wide_types() -> bool { true }

impl Default for AcceleratorConfig {
    fn default() -> Self {
        Self {
            minor_tile: default_minor_tile(),
            second_minor_tile: default_second_minor_tile(),
            split_wide_types: default_split_wide_types(),
            minor_to_major: None,
        }
    }
}

impl AcceleratorConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> DebugInfoResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DebugInfoError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> DebugInfoResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self =
            serde_json::from_reader(reader).map_err(|e| DebugInfoError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DebugInfoResult<()> {
        if self.minor_tile <= 0 {
            return Err(DebugInfoError::InvalidConfig(format!(
                "minor_tile must be positive, got {}",
                self.minor_tile
            )));
        }
        if self.second_minor_tile <= 0 {
            return Err(DebugInfoError::InvalidConfig(format!(
                "second_minor_tile must be positive, got {}",
                self.second_minor_tile
            )));
        }
        if let Some(order) = &self.minor_to_major {
            let mut sorted = order.clone();
            sorted.sort_unstable();
            if sorted.iter().enumerate().any(|(i, &idx)| i != idx) {
                return Err(DebugInfoError::InvalidConfig(format!(
                    "minor_to_major must be a permutation of 0..{}, got {:?}",
                    order.len(),
                    order
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AcceleratorConfig::default();
        assert_eq!(config.minor_tile, 128);
        assert_eq!(config.second_minor_tile, 8);
        assert!(config.split_wide_types);
        assert!(config.minor_to_major.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AcceleratorConfig::from_json_str(r#"{"minor_tile": 64}"#).unwrap();
        assert_eq!(config.minor_tile, 64);
        assert_eq!(config.second_minor_tile, 8);
        assert!(config.split_wide_types);
    }

    #[test]
    fn test_layout_override_parsed() {
        let config =
            AcceleratorConfig::from_json_str(r#"{"minor_to_major": [0, 1, 2]}"#).unwrap();
        assert_eq!(config.minor_to_major, Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_zero_tile_rejected() {
        let err = AcceleratorConfig::from_json_str(r#"{"second_minor_tile": 0}"#).unwrap_err();
        assert!(matches!(err, DebugInfoError::InvalidConfig(_)));
    }

    #[test]
    fn test_bad_permutation_rejected() {
        let err = AcceleratorConfig::from_json_str(r#"{"minor_to_major": [0, 0, 2]}"#).unwrap_err();
        assert!(matches!(err, DebugInfoError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = AcceleratorConfig::from_json_str("{minor_tile").unwrap_err();
        assert!(matches!(err, DebugInfoError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AcceleratorConfig::from_json_file("/nonexistent/accelerator.json").unwrap_err();
        assert!(matches!(err, DebugInfoError::Io(_)));
    }
}
