// Keyed word-vector lookup, parsed from word2vec text format.
//
// The gensim-data archives are gzipped text: a "count dimension" header line
// followed by one "token v1 v2 .. vDim" row per word. Parsing is strict:
// a bad header, a row with the wrong arity, or a truncated file is a load
// failure that propagates to the caller. A missing word at lookup time is
// not an error; that case belongs to the filter step.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use tracing::info;

/// Read-only mapping from token to fixed-length embedding vector.
#[derive(Debug)]
pub struct KeyedVectors {
    vectors: HashMap<String, Vec<f64>>,
    dimension: usize,
}

impl KeyedVectors {
    /// Load a model archive from disk. `.gz` files are decompressed on the
    /// fly; anything else is read as plain word2vec text.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open model archive: {}", path.display()))?;

        let is_gzip = path.extension().and_then(|e| e.to_str()) == Some("gz");
        let reader: Box<dyn Read> = if is_gzip {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        let vectors = Self::read_word2vec_text(BufReader::new(reader))
            .with_context(|| format!("Failed to parse model archive: {}", path.display()))?;

        info!(
            words = vectors.len(),
            dimension = vectors.dimension(),
            path = %path.display(),
            "Loaded word vectors"
        );

        Ok(vectors)
    }

    /// Parse word2vec text format from any buffered reader.
    ///
    /// Header: `<word count> <dimension>`. Rows: `<token> <v1> .. <vDim>`.
    /// Blank lines are ignored; everything else must parse.
    pub fn read_word2vec_text<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut header = String::new();
        reader
            .read_line(&mut header)
            .context("Failed to read header line")?;

        let mut parts = header.split_whitespace();
        let declared_count: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .with_context(|| format!("Malformed header line: {:?}", header.trim_end()))?;
        let dimension: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .with_context(|| format!("Malformed header line: {:?}", header.trim_end()))?;

        if dimension == 0 {
            anyhow::bail!("Header declares zero-dimensional vectors");
        }

        let mut vectors: HashMap<String, Vec<f64>> = HashMap::with_capacity(declared_count);
        let mut rows_read = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            // Header is line 1, so the first row is line 2
            let line_no = idx + 2;
            let line = line.with_context(|| format!("Failed to read line {line_no}"))?;

            if line.trim().is_empty() {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let word = tokens
                .next()
                .with_context(|| format!("Line {line_no}: missing token"))?;

            let values = tokens
                .map(|t| {
                    t.parse::<f64>()
                        .with_context(|| format!("Line {line_no}: bad float {t:?}"))
                })
                .collect::<Result<Vec<f64>>>()?;

            if values.len() != dimension {
                anyhow::bail!(
                    "Line {line_no}: expected {dimension} values for {word:?}, found {}",
                    values.len()
                );
            }

            vectors.insert(word.to_string(), values);
            rows_read += 1;
        }

        if rows_read != declared_count {
            anyhow::bail!(
                "Header declares {declared_count} words but the file contains {rows_read}; archive is truncated or corrupt"
            );
        }

        Ok(Self { vectors, dimension })
    }

    /// Membership test, the filter step's fast path.
    pub fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }

    /// Retrieve the vector for a word, if the model knows it.
    pub fn get(&self, word: &str) -> Option<&[f64]> {
        self.vectors.get(word).map(|v| v.as_slice())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
