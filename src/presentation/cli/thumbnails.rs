use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::print_json;
use crate::domain::thumbnails::{
    AnalyzeThumbnailRequest, EnhanceThumbnailRequest, EnhancementRequest, strip_data_url,
};
use crate::infrastructure::client::TubeboostClient;

#[derive(Debug, Subcommand)]
pub enum ThumbnailCommands {
    /// Ask for enhancement suggestions for a thumbnail
    Analyze(AnalyzeCommand),
    /// Enhance a thumbnail and write the result to disk
    Enhance(EnhanceCommand),
}

pub async fn run(client: &TubeboostClient, cmd: ThumbnailCommands) -> Result<()> {
    match cmd {
        ThumbnailCommands::Analyze(c) => analyze(client, c).await,
        ThumbnailCommands::Enhance(c) => enhance(client, c).await,
    }
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    #[arg(long)]
    pub file: PathBuf,
}

pub async fn analyze(client: &TubeboostClient, command: AnalyzeCommand) -> Result<()> {
    let payload = AnalyzeThumbnailRequest {
        image: read_base64(&command.file)?,
    };

    let analysis = client.thumbnails().analyze(&payload).await?;
    print_json(&analysis)
}

#[derive(Debug, Args)]
pub struct EnhanceCommand {
    #[arg(long)]
    pub file: PathBuf,
    /// Where to write the enhanced image
    #[arg(long)]
    pub output: PathBuf,
    #[arg(long, default_value_t = 0.0)]
    pub contrast: f64,
    #[arg(long, default_value_t = 0.0)]
    pub saturation: f64,
    #[arg(long, default_value_t = 0.0)]
    pub clarity: f64,
}

#[derive(Debug, Serialize)]
struct EnhanceSummary {
    success: bool,
    message: String,
    output: PathBuf,
}

/// The output file is always written: on failure the server echoes the
/// original image back, so it holds an untouched copy.
pub async fn enhance(client: &TubeboostClient, command: EnhanceCommand) -> Result<()> {
    let payload = EnhanceThumbnailRequest {
        image: read_base64(&command.file)?,
        enhancements: EnhancementRequest {
            contrast: command.contrast,
            saturation: command.saturation,
            clarity: command.clarity,
        },
    };

    let result = client.thumbnails().enhance(&payload).await?;

    let bytes = STANDARD
        .decode(strip_data_url(&result.enhanced_image))
        .context("server returned invalid base64 image data")?;
    std::fs::write(&command.output, bytes)
        .with_context(|| format!("failed to write {}", command.output.display()))?;

    print_json(&EnhanceSummary {
        success: result.success,
        message: result.message,
        output: command.output,
    })
}

fn read_base64(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(STANDARD.encode(bytes))
}
