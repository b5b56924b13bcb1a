// Pretrained embedding model acquisition: preset registry, download cache,
// and the word2vec text parser.
//
// The build step never talks to the network: `download-model` fetches and
// caches the archive, and `load_preset` reads it back from the cache.

pub mod download;
pub mod keyed_vectors;
pub mod preset;

use std::path::Path;

use anyhow::Result;

pub use keyed_vectors::KeyedVectors;
pub use preset::ModelPreset;

/// Load a cached preset archive into an in-memory lookup.
///
/// This is the main entry point for `briquette build`: it reads the gzipped
/// word2vec text from the model cache and checks that the archive actually
/// carries the dimensionality the preset promises.
pub fn load_preset(model_dir: &Path, preset: ModelPreset) -> Result<KeyedVectors> {
    let archive = download::model_path(model_dir, preset);
    let vectors = KeyedVectors::load(&archive)?;

    if vectors.dimension() != preset.dimension() {
        anyhow::bail!(
            "{} declares {}-dimensional vectors but {} should be {}-dimensional.\n\
             The cached archive may be corrupt; delete it and run `briquette download-model` again.",
            archive.display(),
            vectors.dimension(),
            preset.name(),
            preset.dimension()
        );
    }

    Ok(vectors)
}
