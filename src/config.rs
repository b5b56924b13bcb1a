use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::model::ModelPreset;

/// Default output file name, matching what the classifier loads at startup.
pub const DEFAULT_OUTPUT_FILE: &str = "word_vectors_mini.json";

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret; the env vars exist so CI and local runs can
/// point at different cache and output locations. The .env file is
/// loaded automatically at startup via dotenvy.
pub struct Config {
    /// Directory containing downloaded embedding archives
    pub model_dir: PathBuf,
    /// Where `build` writes the bundle (default: ./word_vectors_mini.json)
    pub output_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Both values have defaults, so `briquette build` works out of the
    /// box once the model archive has been downloaded.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("BRIQUETTE_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::model::download::default_model_dir());

        let output_path = env::var("BRIQUETTE_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_FILE));

        Ok(Self {
            model_dir,
            output_path,
        })
    }

    /// Check that the embedding archive for `preset` is on disk.
    /// Call this before any operation that needs to load vectors.
    pub fn require_model(&self, preset: ModelPreset) -> Result<()> {
        if !crate::model::download::model_file_present(&self.model_dir, preset) {
            anyhow::bail!(
                "Embedding archive for {} not found in {}\n\
                 Run `briquette download-model` to download it ({}).",
                preset.name(),
                self.model_dir.display(),
                preset.size_hint()
            );
        }
        Ok(())
    }
}
