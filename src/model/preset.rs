// Preset registry for pretrained GloVe-Twitter models.
//
// These are the models published through the gensim-data release channel as
// gzipped word2vec text. All four share the same 1.19M-word Twitter
// vocabulary and differ only in vector dimensionality (and archive size).

use clap::ValueEnum;

/// Base URL for the gensim-data release archives.
const GENSIM_DATA_URL: &str =
    "https://github.com/RaRe-Technologies/gensim-data/releases/download";

/// A named pretrained model the downloader knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelPreset {
    /// 25-dimensional GloVe Twitter vectors (~104 MB), the default
    #[value(name = "glove-twitter-25")]
    GloveTwitter25,
    /// 50-dimensional GloVe Twitter vectors (~199 MB)
    #[value(name = "glove-twitter-50")]
    GloveTwitter50,
    /// 100-dimensional GloVe Twitter vectors (~387 MB)
    #[value(name = "glove-twitter-100")]
    GloveTwitter100,
    /// 200-dimensional GloVe Twitter vectors (~758 MB)
    #[value(name = "glove-twitter-200")]
    GloveTwitter200,
}

impl ModelPreset {
    pub fn name(&self) -> &'static str {
        match self {
            ModelPreset::GloveTwitter25 => "glove-twitter-25",
            ModelPreset::GloveTwitter50 => "glove-twitter-50",
            ModelPreset::GloveTwitter100 => "glove-twitter-100",
            ModelPreset::GloveTwitter200 => "glove-twitter-200",
        }
    }

    /// Vector dimensionality, fixed by the model and inherited by the bundle.
    pub fn dimension(&self) -> usize {
        match self {
            ModelPreset::GloveTwitter25 => 25,
            ModelPreset::GloveTwitter50 => 50,
            ModelPreset::GloveTwitter100 => 100,
            ModelPreset::GloveTwitter200 => 200,
        }
    }

    /// Approximate archive size, for download messages.
    pub fn size_hint(&self) -> &'static str {
        match self {
            ModelPreset::GloveTwitter25 => "~104 MB",
            ModelPreset::GloveTwitter50 => "~199 MB",
            ModelPreset::GloveTwitter100 => "~387 MB",
            ModelPreset::GloveTwitter200 => "~758 MB",
        }
    }

    /// File name of the cached archive within the model directory.
    pub fn archive_name(&self) -> String {
        format!("{}.gz", self.name())
    }

    pub fn download_url(&self) -> String {
        format!("{}/{}/{}.gz", GENSIM_DATA_URL, self.name(), self.name())
    }
}

impl Default for ModelPreset {
    fn default() -> Self {
        ModelPreset::GloveTwitter25
    }
}

impl std::fmt::Display for ModelPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
