use crate::application::services::{ThumbnailService, TitleService};
use crate::infrastructure::ai::{AiSettings, CompletionClient};

/// Upper bound on thumbnails decoded and enhanced at the same time.
const DEFAULT_IMAGE_CONCURRENCY: usize = 4;

/// Everything that varies between production and test environments.
pub struct AppStateConfig {
    pub ai: AiSettings,
    pub ai_rate_limit_per_minute: u32,
    pub image_concurrency: usize,
}

impl AppStateConfig {
    pub fn new(ai: AiSettings, ai_rate_limit_per_minute: u32) -> Self {
        Self {
            ai,
            ai_rate_limit_per_minute,
            image_concurrency: DEFAULT_IMAGE_CONCURRENCY,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub title_service: TitleService,
    pub thumbnail_service: ThumbnailService,
    pub ai_configured: bool,
    pub ai_model: String,
    pub ai_rate_limit_per_minute: u32,
}

impl AppState {
    pub fn new(config: AppStateConfig) -> Self {
        #[allow(clippy::expect_used)]
        let http_client = reqwest::ClientBuilder::new()
            .build()
            .expect("failed to build HTTP client");

        let ai = CompletionClient::new(http_client, config.ai);

        Self {
            ai_configured: ai.is_configured(),
            ai_model: ai.model().to_string(),
            title_service: TitleService::new(ai.clone()),
            thumbnail_service: ThumbnailService::new(ai, config.image_concurrency),
            ai_rate_limit_per_minute: config.ai_rate_limit_per_minute,
        }
    }
}
