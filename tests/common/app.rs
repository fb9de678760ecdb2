//! Test application factory for integration tests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use brickify::error::ConvertError;
use brickify::models::{AppConfig, MosaicReport};
use brickify::services::{ConvertOptions, MosaicPipeline};

use super::fixtures;

/// Pipeline backed by a temporary config file and output directory
pub struct TestApp {
    pub pipeline: MosaicPipeline,
    pub config_path: PathBuf,
    dir: TempDir,
}

impl TestApp {
    /// Create a test app using the small fixture configuration
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output_dir = dir.path().join("output");
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, fixtures::small_config_yaml(&output_dir))
            .expect("Failed to write config");

        let config = AppConfig::load_or_default(Some(config_path.as_path())).expect("Config should load");
        let pipeline =
            MosaicPipeline::new(Arc::new(config)).expect("Failed to create pipeline");

        Self {
            pipeline,
            config_path,
            dir,
        }
    }

    /// Temporary directory owned by this app
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_dir(&self) -> &Path {
        &self.pipeline.config().output_dir
    }

    /// Convert a base64 image with a fixed seed
    pub fn convert(
        &self,
        input: &str,
        options: ConvertOptions,
        seed: u64,
    ) -> Result<MosaicReport, ConvertError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.pipeline.convert_base64(input, options, &mut rng)
    }

    /// Write `bytes` into the temp dir and return the path
    pub fn write_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }
}
