// Bundle inspection: read a written bundle back and describe it.
//
// This is what the consumer effectively does at startup; having it as a
// subcommand means a build can be sanity-checked without leaving the
// terminal.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::writer::file_size_kb;

/// Summary of a bundle file on disk.
#[derive(Debug)]
pub struct BundleInfo {
    pub word_count: usize,
    pub dimension: usize,
    pub size_kb: f64,
    /// First few words, for a quick eyeball check.
    pub sample: Vec<String>,
}

/// Read and summarize a bundle file.
pub fn inspect(path: &Path) -> Result<BundleInfo> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read bundle: {}", path.display()))?;

    let words: BTreeMap<String, Vec<f64>> = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a word → vector JSON object", path.display()))?;

    let dimension = words.values().next().map(|v| v.len()).unwrap_or(0);
    let sample: Vec<String> = words.keys().take(5).cloned().collect();

    Ok(BundleInfo {
        word_count: words.len(),
        dimension,
        size_kb: file_size_kb(path)?,
        sample,
    })
}

/// Display a bundle summary in the terminal.
pub fn display(info: &BundleInfo, path: &Path) {
    println!("\n{}", format!("=== {} ===", path.display()).bold());
    println!("  Words:     {}", info.word_count);
    println!("  Dimension: {}", info.dimension);
    println!("  Size:      {:.2} KB", info.size_kb);
    if !info.sample.is_empty() {
        println!("  Sample:    {}", info.sample.join(", ").dimmed());
    }
}
