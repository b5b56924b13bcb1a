// Model download helper for pretrained GloVe archives.
//
// Fetches gzipped word2vec archives from the gensim-data release channel
// and stores them in a platform-appropriate directory
// (~/.local/share/briquette/models/ on Linux) so they persist across runs.
// An archive that is already cached is never fetched again.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::preset::ModelPreset;

/// Returns the default directory for cached model archives.
/// Uses the platform data directory: ~/.local/share/briquette/models/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("briquette")
        .join("models")
}

/// Path of a preset's cached archive within the model directory.
pub fn model_path(dir: &Path, preset: ModelPreset) -> PathBuf {
    dir.join(preset.archive_name())
}

/// Check whether a preset's archive is already cached.
pub fn model_file_present(dir: &Path, preset: ModelPreset) -> bool {
    model_path(dir, preset).exists()
}

/// Download a preset's archive into the model directory.
///
/// Shows a progress bar; these archives run from ~104 MB to ~758 MB.
/// Skips the fetch entirely when the archive already exists.
pub async fn download_model(dir: &Path, preset: ModelPreset) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create model directory: {}", dir.display()))?;

    let archive_path = model_path(dir, preset);
    if archive_path.exists() {
        info!(preset = preset.name(), "Model archive already cached, skipping");
        println!("  {} (already exists)", preset.archive_name());
        return Ok(());
    }

    println!(
        "  Downloading {} ({})...",
        preset.archive_name(),
        preset.size_hint()
    );
    download_file(&preset.download_url(), &archive_path).await
}

/// Download a single file from a URL to a local path, with a progress bar.
async fn download_file(url: &str, dest: &Path) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let total_size = response.content_length();

    let pb = if let Some(size) = total_size {
        let pb = ProgressBar::new(size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .expect("valid template")
                .progress_chars("=> "),
        );
        pb
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("    {spinner} {bytes}")
                .expect("valid template"),
        );
        pb
    };

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;

    pb.set_position(bytes.len() as u64);

    std::fs::write(dest, &bytes).with_context(|| format!("Failed to write {}", dest.display()))?;

    pb.finish_and_clear();

    info!("Downloaded {} to {}", url, dest.display());
    Ok(())
}
