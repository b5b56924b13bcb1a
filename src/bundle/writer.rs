// Bundle serialization: compact JSON on disk plus the size report.
//
// The on-disk shape is a bare JSON object, word → array of floats, with no
// wrapper, no header, and no whitespace. The consumer loads it as-is.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::filter::VectorBundle;

/// Serialize the bundle to `path` and return the written size in kilobytes.
///
/// Write failures propagate; there is no retry and no partial-file
/// recovery.
pub fn write_bundle(bundle: &VectorBundle, path: &Path) -> Result<f64> {
    let json = serde_json::to_string(bundle.words()).context("Failed to serialize bundle")?;

    std::fs::write(path, &json)
        .with_context(|| format!("Failed to write bundle to {}", path.display()))?;

    let size_kb = file_size_kb(path)?;

    info!(
        words = bundle.word_count(),
        dimension = bundle.dimension(),
        size_kb,
        path = %path.display(),
        "Wrote vector bundle"
    );

    Ok(size_kb)
}

/// File size in kilobytes (1 KB = 1024 bytes), as reported after a build.
pub fn file_size_kb(path: &Path) -> Result<f64> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    Ok(metadata.len() as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::filter::build_bundle;
    use crate::model::keyed_vectors::KeyedVectors;
    use std::collections::BTreeSet;
    use std::io::Cursor;

    fn sample_bundle() -> VectorBundle {
        let text = "2 2\ngame 0.5 -0.5\nmovie 0.125 0.25\n";
        let model = KeyedVectors::read_word2vec_text(Cursor::new(text)).unwrap();
        let vocabulary: BTreeSet<String> =
            ["game", "movie"].iter().map(|w| w.to_string()).collect();
        build_bundle(&model, &vocabulary)
    }

    #[test]
    fn test_write_reports_positive_size() {
        let dir = std::env::temp_dir().join("briquette-writer-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bundle.json");

        let size_kb = write_bundle(&sample_bundle(), &path).unwrap();
        assert!(size_kb > 0.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_output_is_compact() {
        let dir = std::env::temp_dir().join("briquette-compact-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bundle.json");

        write_bundle(&sample_bundle(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains('\n'), "Compact JSON has no newlines");
        assert!(!written.contains(": "), "Compact JSON has no padded colons");
        assert!(written.starts_with('{') && written.ends_with('}'));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_to_missing_directory_errors() {
        let path = std::env::temp_dir()
            .join("briquette-no-such-dir")
            .join("deeper")
            .join("bundle.json");
        let result = write_bundle(&sample_bundle(), &path);
        assert!(result.is_err(), "Writing into a missing directory should fail");
    }

    #[test]
    fn test_size_of_missing_file_errors() {
        let path = std::env::temp_dir().join("briquette-definitely-missing.json");
        assert!(file_size_kb(&path).is_err());
    }
}
