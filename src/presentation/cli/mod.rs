pub mod thumbnails;
pub mod titles;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use crate::infrastructure::ai::{DEFAULT_MODEL, OPENAI_URL};
use thumbnails::ThumbnailCommands;
use titles::TitlesCommand;

#[derive(Debug, Parser)]
#[command(author, version, about = "Optimize YouTube titles and thumbnails", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "TUBEBOOST_URL",
        default_value = "http://localhost:3000"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Suggest five optimized titles for a video
    Titles(TitlesCommand),

    /// Analyze or enhance a thumbnail image
    Thumbnail {
        #[command(subcommand)]
        command: ThumbnailCommands,
    },
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "TUBEBOOST_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// OpenAI-compatible chat completions endpoint
    #[arg(long, env = "TUBEBOOST_AI_URL", default_value = OPENAI_URL)]
    pub ai_url: String,

    #[arg(long, env = "TUBEBOOST_AI_MODEL", default_value = DEFAULT_MODEL)]
    pub ai_model: String,

    /// Requests per minute per client IP on the model-backed routes
    #[arg(long, env = "TUBEBOOST_AI_RATE_LIMIT", default_value_t = 30)]
    pub ai_rate_limit: u32,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
