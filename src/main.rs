use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tubeboost::application::{ServerConfig, serve};
use tubeboost::infrastructure::ai::AiSettings;
use tubeboost::infrastructure::client::TubeboostClient;
use tubeboost::presentation::cli::{Cli, Commands, ServeCommand, thumbnails, titles};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(cmd) => run_server(cmd).await,
        Commands::Titles(cmd) => {
            let client = TubeboostClient::from_base_url(&cli.api_url)?;
            titles::run(&client, cmd).await
        }
        Commands::Thumbnail { command } => {
            let client = TubeboostClient::from_base_url(&cli.api_url)?;
            thumbnails::run(&client, command).await
        }
    }
}

async fn run_server(command: ServeCommand) -> Result<()> {
    let config = ServerConfig {
        bind_address: command.bind_address,
        ai: AiSettings {
            url: command.ai_url,
            api_key: command.openai_api_key,
            model: command.ai_model,
        },
        ai_rate_limit_per_minute: command.ai_rate_limit,
    };

    serve(config).await
}

/// Logs go to stderr so CLI output on stdout stays machine-readable.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
