// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Run configuration.
//!
//! Settings can come from a YAML or TOML file; anything left out falls
//! back to the same defaults the command line uses.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Relative path of the soprano stem inside a track directory
pub const DEFAULT_STEM_PATH: &str = "stems_midi/1_trumpet.mid";
/// Name used for output files and messages
pub const DEFAULT_SUFFIX: &str = "soprano";

/// Settings for one extraction run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractConfig {
    /// Test split directory holding one subdirectory per track
    #[serde(default = "default_test_dir")]
    pub test_dir: PathBuf,
    /// Flat directory receiving the renamed copies
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Number of stems to sample
    #[serde(default = "default_num")]
    pub num: usize,
    /// PRNG seed; negative values are allowed
    #[serde(default = "default_seed")]
    pub seed: i64,
    /// Stem file relative to each track directory
    #[serde(default = "default_stem_path")]
    pub stem_path: PathBuf,
    /// Voice name appended to the track ID
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_test_dir() -> PathBuf {
    PathBuf::from("data/cocochorales_tiny_v1_midi/test")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("inference/input_midi/1")
}
fn default_num() -> usize {
    100
}
fn default_seed() -> i64 {
    42
}
fn default_stem_path() -> PathBuf {
    PathBuf::from(DEFAULT_STEM_PATH)
}
fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            test_dir: default_test_dir(),
            output_dir: default_output_dir(),
            num: default_num(),
            seed: default_seed(),
            stem_path: default_stem_path(),
            suffix: default_suffix(),
        }
    }
}

impl ExtractConfig {
    /// Load settings from a `.yaml`/`.yml` or `.toml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            Some("toml") => Self::from_toml(&contents),
            _ => bail!("Unsupported config format: {:?} (expected .yaml, .yml or .toml)", path),
        }
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse settings from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = ExtractConfig::default();
        assert_eq!(config.num, 100);
        assert_eq!(config.seed, 42);
        assert_eq!(config.stem_path, PathBuf::from("stems_midi/1_trumpet.mid"));
        assert_eq!(config.suffix, "soprano");
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
test_dir: "/data/cocochorales/test"
num: 12
"#;

        let config = ExtractConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.test_dir, PathBuf::from("/data/cocochorales/test"));
        assert_eq!(config.num, 12);
        assert_eq!(config.seed, 42);
        assert_eq!(config.output_dir, default_output_dir());
        assert_eq!(config.suffix, "soprano");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ExtractConfig::from_yaml("").unwrap(), ExtractConfig::default());
    }

    #[test]
    fn test_toml() {
        let text = r#"
seed = 7
stem_path = "stems_midi/4_tuba.mid"
suffix = "bass"
"#;

        let config = ExtractConfig::from_toml(text).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.stem_path, PathBuf::from("stems_midi/4_tuba.mid"));
        assert_eq!(config.suffix, "bass");
        assert_eq!(config.num, 100);
    }

    #[test]
    fn test_negative_seed() {
        assert_eq!(ExtractConfig::from_yaml("seed: -1\n").unwrap().seed, -1);
        assert_eq!(ExtractConfig::from_toml("seed = -3\n").unwrap().seed, -3);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("run.yml");
        fs::write(&yaml_path, "num: 3\n").unwrap();
        assert_eq!(ExtractConfig::load(&yaml_path).unwrap().num, 3);

        let toml_path = dir.path().join("run.toml");
        fs::write(&toml_path, "num = 4\n").unwrap();
        assert_eq!(ExtractConfig::load(&toml_path).unwrap().num, 4);

        let json_path = dir.path().join("run.json");
        fs::write(&json_path, "{}").unwrap();
        assert!(ExtractConfig::load(&json_path).is_err());
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.yaml");
        fs::write(&path, "num: [").unwrap();
        assert!(ExtractConfig::load(&path).is_err());
        assert!(ExtractConfig::load(dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_round_trip() {
        let original = ExtractConfig {
            num: 8,
            seed: 1234,
            ..ExtractConfig::default()
        };
        let parsed = ExtractConfig::from_yaml(&original.to_yaml().unwrap()).unwrap();
        assert_eq!(original, parsed);
    }
}
