use anyhow::Result;
use clap::Args;

use super::print_json;
use crate::domain::titles::OptimizeTitlesRequest;
use crate::infrastructure::client::TubeboostClient;

#[derive(Debug, Args)]
pub struct TitlesCommand {
    /// The video's current title
    #[arg(long)]
    pub title: String,
    /// Short description of what the thumbnail shows
    #[arg(long)]
    pub context: Option<String>,
}

pub async fn run(client: &TubeboostClient, command: TitlesCommand) -> Result<()> {
    let payload = OptimizeTitlesRequest {
        title: command.title,
        thumbnail_context: command.context,
    };

    let titles = client.titles().optimize(&payload).await?;
    print_json(&titles)
}
