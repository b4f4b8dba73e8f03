//! ocrus - train and run the isolated-glyph recognizer
//!
//! Two subcommands mirror the two phases of the system:
//!
//! - `train` segments a labeled reference image and asks the operator
//!   for one keystroke per candidate, then persists the training set
//! - `recognize` classifies the glyphs of a query image against a
//!   persisted training set and prints the assembled text
//!
//! Every failure (unreadable image, unwritable dataset, operator abort,
//! empty model) propagates to `main` and exits non-zero.

mod console;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::ConsoleLabelSource;
use ocrus_recog::{PipelineParams, TrainingSet, collect_training_set, recognize};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ocrus", version, about = "Isolated-glyph OCR via nearest-neighbor matching")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a training set from a labeled reference image
    Train {
        /// Reference image containing the glyphs to label
        #[arg(long)]
        image: PathBuf,
        /// Output label table
        #[arg(long, default_value = "classifications.txt")]
        labels: PathBuf,
        /// Output feature table
        #[arg(long, default_value = "images.txt")]
        features: PathBuf,
        /// Directory the per-candidate display images are written to
        #[arg(long, default_value = "ocrus-train")]
        workdir: PathBuf,
    },
    /// Recognize the glyphs of a query image
    Recognize {
        /// Query image to read
        #[arg(long)]
        image: PathBuf,
        /// Label table written by `train`
        #[arg(long, default_value = "classifications.txt")]
        labels: PathBuf,
        /// Feature table written by `train`
        #[arg(long, default_value = "images.txt")]
        features: PathBuf,
        /// Where to write the annotated query image
        #[arg(long, default_value = "annotated.png")]
        annotated: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = PipelineParams::default();

    match cli.command {
        Command::Train {
            image,
            labels,
            features,
            workdir,
        } => {
            info!("reading reference image {}", image.display());
            let src = ocrus_io::read_image(&image)
                .with_context(|| format!("cannot load reference image {}", image.display()))?;

            let mut source = ConsoleLabelSource::new(workdir.clone())
                .with_context(|| format!("cannot prepare work directory {}", workdir.display()))?;
            let set = collect_training_set(&src, &params, &mut source)
                .context("training session failed")?;

            set.write_to_files(&labels, &features).with_context(|| {
                format!(
                    "cannot write training set to {} / {}",
                    labels.display(),
                    features.display()
                )
            })?;
            info!(
                "training complete: {} examples written to {} / {}",
                set.len(),
                labels.display(),
                features.display()
            );
        }
        Command::Recognize {
            image,
            labels,
            features,
            annotated,
        } => {
            let set = TrainingSet::read_from_files(&labels, &features).with_context(|| {
                format!(
                    "cannot load training set from {} / {}",
                    labels.display(),
                    features.display()
                )
            })?;
            info!("loaded {} training examples", set.len());

            let src = ocrus_io::read_image(&image)
                .with_context(|| format!("cannot load query image {}", image.display()))?;

            let result = recognize(&src, &set, &params).context("recognition failed")?;

            println!("Text: {}", result.text);

            ocrus_io::write_image(&result.annotated, &annotated)
                .with_context(|| format!("cannot write annotated image {}", annotated.display()))?;
            info!("annotated query image written to {}", annotated.display());
        }
    }

    Ok(())
}
