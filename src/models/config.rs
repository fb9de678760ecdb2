use mosaic_quantize::{BinningError, BinningTable, MosaicQuantizer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::SizeClass;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Canvas, block and budget per size class
    #[serde(default)]
    pub sizes: SizesConfig,

    /// Exclusive upper bounds of every bin but the last, ascending
    #[serde(default = "default_color_limits")]
    pub color_limits: Vec<u8>,

    /// Weight tag per bin; one more entry than `color_limits`
    #[serde(default = "default_color_weights")]
    pub color_weights: Vec<i32>,

    /// Contrast levels for the contrast and combined variants
    #[serde(default = "default_contrast_levels")]
    pub contrast_levels: Vec<i32>,

    /// Allow preview PNGs to be written when a conversion asks for them
    #[serde(default)]
    pub save_preview: bool,

    /// Root directory for preview output
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SizesConfig {
    #[serde(default = "default_small")]
    pub small: SizeConfig,

    #[serde(default = "default_medium")]
    pub medium: SizeConfig,
}

/// Geometry and brick budget for one size class
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct SizeConfig {
    /// Side of the square canvas in pixels
    pub canvas: u32,

    /// Downsampling block (square)
    #[serde(default = "default_block")]
    pub block: usize,

    /// Maximum bricks of any single color
    pub budget: usize,
}

fn default_color_limits() -> Vec<u8> {
    BinningTable::five_tone().limits().to_vec()
}

fn default_color_weights() -> Vec<i32> {
    BinningTable::five_tone().weights().to_vec()
}

fn default_contrast_levels() -> Vec<i32> {
    vec![20, 40]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_block() -> usize {
    1
}

fn default_small() -> SizeConfig {
    SizeConfig {
        canvas: 32,
        block: 1,
        budget: 260,
    }
}

fn default_medium() -> SizeConfig {
    SizeConfig {
        canvas: 48,
        block: 1,
        budget: 560,
    }
}

impl Default for SizesConfig {
    fn default() -> Self {
        Self {
            small: default_small(),
            medium: default_medium(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sizes: SizesConfig::default(),
            color_limits: default_color_limits(),
            color_weights: default_color_weights(),
            contrast_levels: default_contrast_levels(),
            save_preview: false,
            output_dir: default_output_dir(),
        }
    }
}

/// Error loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid color table: {0}")]
    ColorTable(#[from] BinningError),

    #[error("Invalid {size} size: {reason}")]
    InvalidSize {
        size: SizeClass,
        reason: &'static str,
    },
}

impl AppConfig {
    /// Parse and validate YAML configuration text.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, or use defaults.
    ///
    /// A missing file falls back to the built-in defaults. A file that
    /// exists but cannot be read, parsed or validated is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::info!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            bins = config.color_weights.len(),
            contrast_levels = config.contrast_levels.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Check every invariant the conversion relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.binning_table()?;
        for size in SizeClass::ALL {
            let spec = self.size(size);
            if spec.canvas == 0 {
                return Err(ConfigError::InvalidSize {
                    size,
                    reason: "canvas must be non-zero",
                });
            }
            if spec.block == 0 {
                return Err(ConfigError::InvalidSize {
                    size,
                    reason: "block must be non-zero",
                });
            }
        }
        Ok(())
    }

    /// The binning table described by `color_limits` and `color_weights`.
    pub fn binning_table(&self) -> Result<BinningTable, BinningError> {
        BinningTable::new(self.color_limits.clone(), self.color_weights.clone())
    }

    /// Settings for one size class
    pub fn size(&self, size: SizeClass) -> &SizeConfig {
        match size {
            SizeClass::Small => &self.sizes.small,
            SizeClass::Medium => &self.sizes.medium,
        }
    }

    /// A quantizer configured for `size`.
    pub fn quantizer(&self, size: SizeClass) -> Result<MosaicQuantizer, ConfigError> {
        let spec = self.size(size);
        Ok(MosaicQuantizer::new(self.binning_table()?)
            .contrast_levels(self.contrast_levels.clone())
            .block_size(spec.block, spec.block)
            .budget(spec.budget))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.color_limits, vec![51, 102, 153, 204]);
        assert_eq!(config.color_weights, vec![0, 1, 2, 3, 4]);
        assert_eq!(config.contrast_levels, vec![20, 40]);
        assert!(!config.save_preview);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_budgets_are_feasible() {
        let config = AppConfig::default();
        let bins = config.color_weights.len();

        for size in SizeClass::ALL {
            let spec = config.size(size);
            let cells = (spec.canvas as usize).div_ceil(spec.block).pow(2);
            assert!(bins * spec.budget >= cells, "{size} budget too small");
        }
    }

    #[test]
    fn test_size_lookup() {
        let config = AppConfig::default();
        assert_eq!(config.size(SizeClass::Small).canvas, 32);
        assert_eq!(config.size(SizeClass::Medium).canvas, 48);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
sizes:
  small:
    canvas: 16
    budget: 60
  medium:
    canvas: 64
    block: 2
    budget: 300
color_limits: [85, 170]
color_weights: [10, 20, 30]
contrast_levels: [-20, 35]
save_preview: true
output_dir: /tmp/previews
"#;

        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(
            config.sizes.small,
            SizeConfig {
                canvas: 16,
                block: 1,
                budget: 60
            }
        );
        assert_eq!(config.sizes.medium.block, 2);
        assert_eq!(config.binning_table().unwrap().bin_count(), 3);
        assert_eq!(config.contrast_levels, vec![-20, 35]);
        assert!(config.save_preview);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/previews"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_yaml_str("save_preview: true\n").unwrap();

        assert!(config.save_preview);
        assert_eq!(config.sizes, SizesConfig::default());
        assert_eq!(config.color_weights, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_limits_weights_mismatch_is_fatal() {
        let yaml = "color_limits: [50, 100]\ncolor_weights: [0, 1, 2, 3]\n";

        let err = AppConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ColorTable(BinningError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_descending_limits_are_fatal() {
        let yaml = "color_limits: [100, 50]\ncolor_weights: [0, 1, 2]\n";

        let err = AppConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ColorTable(_)));
    }

    #[test]
    fn test_zero_block_is_fatal() {
        let yaml = "sizes:\n  small:\n    canvas: 16\n    block: 0\n    budget: 10\n";

        let err = AppConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSize {
                size: SizeClass::Small,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = AppConfig::from_yaml_str("sizes: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_quantizer_uses_size_settings() {
        let config = AppConfig::default();
        let quantizer = config.quantizer(SizeClass::Small).unwrap();

        assert_eq!(quantizer.levels(), &[20, 40]);
        assert_eq!(quantizer.table().bin_count(), 5);
    }
}
