use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use briquette::config::Config;
use briquette::model::ModelPreset;

/// Briquette: compact word-vector bundles for video content classification.
///
/// Filters a pretrained GloVe Twitter model down to a small curated
/// vocabulary and writes the result as compact JSON for the classifier
/// to load at startup.
#[derive(Parser)]
#[command(name = "briquette", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a pretrained embedding archive (default: glove-twitter-25, ~104 MB)
    DownloadModel {
        /// Which pretrained model to fetch
        #[arg(long, value_enum, default_value_t)]
        model: ModelPreset,
    },

    /// Build the word-vector bundle from a cached model
    Build {
        /// Which pretrained model to read vectors from
        #[arg(long, value_enum, default_value_t)]
        model: ModelPreset,

        /// Where to write the bundle (default: ./word_vectors_mini.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the curated vocabulary, grouped by category
    Vocab,

    /// Summarize a bundle file (word count, dimension, size on disk)
    Inspect {
        /// Bundle file to inspect (default: the configured output path)
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("briquette=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DownloadModel { model } => {
            let config = Config::load()?;

            println!("Downloading embedding model...");
            println!("  Destination: {}", config.model_dir.display());

            briquette::model::download::download_model(&config.model_dir, model).await?;

            println!("\n{}", "Model downloaded.".bold());
            println!("You can now run `briquette build`.");
        }

        Commands::Build { model, output } => {
            let config = Config::load()?;
            config.require_model(model)?;
            let output_path = output.unwrap_or(config.output_path);

            println!("Loading word vectors...");
            let vectors = briquette::model::load_preset(&config.model_dir, model)?;
            println!(
                "  {} words, {} dimensions",
                vectors.len(),
                vectors.dimension()
            );

            let vocabulary = briquette::vocabulary::build_vocabulary();
            let bundle = briquette::bundle::filter::build_bundle(&vectors, &vocabulary);
            println!("Created vectors for {} words", bundle.word_count());

            let size_kb = briquette::bundle::writer::write_bundle(&bundle, &output_path)?;
            println!("Word vectors saved to {}", output_path.display());
            println!("File size: {size_kb:.2} KB");
        }

        Commands::Vocab => {
            briquette::vocabulary::display();
        }

        Commands::Inspect { path } => {
            let config = Config::load()?;
            let path = path.unwrap_or(config.output_path);

            let info = briquette::bundle::inspect::inspect(&path)?;
            briquette::bundle::inspect::display(&info, &path);
        }
    }

    Ok(())
}
