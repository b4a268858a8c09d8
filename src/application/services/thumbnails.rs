use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::domain::thumbnails::{
    EnhancementRequest, EnhancementResult, ThumbnailAnalysis, fallback_thumbnail_analysis,
};
use crate::infrastructure::ai::CompletionClient;
use crate::infrastructure::ai::prompts::{THUMBNAIL_MAX_TOKENS, thumbnail_messages};
use crate::infrastructure::image_processing::enhance_base64_image;

#[derive(Debug, Clone)]
pub struct ThumbnailService {
    ai: CompletionClient,
    image_semaphore: Arc<Semaphore>,
}

impl ThumbnailService {
    pub fn new(ai: CompletionClient, max_concurrent_enhancements: usize) -> Self {
        Self {
            ai,
            image_semaphore: Arc::new(Semaphore::new(max_concurrent_enhancements.max(1))),
        }
    }

    /// Ask the model for enhancement suggestions. Any failure, including a
    /// response that does not match the analysis shape, yields the static
    /// fallback analysis.
    #[tracing::instrument(skip_all)]
    pub async fn analyze_thumbnail(&self, image: &str) -> ThumbnailAnalysis {
        if !self.ai.is_configured() {
            info!("AI API key not configured, using fallback thumbnail analysis");
            return fallback_thumbnail_analysis();
        }

        let payload = match self
            .ai
            .complete_json(thumbnail_messages(image), THUMBNAIL_MAX_TOKENS)
            .await
        {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "thumbnail analysis failed, using fallback analysis");
                return fallback_thumbnail_analysis();
            }
        };

        match serde_json::from_value::<ThumbnailAnalysis>(payload) {
            Ok(analysis) => analysis.clamped(),
            Err(err) => {
                warn!(error = %err, "thumbnail analysis had an unexpected shape, using fallback analysis");
                fallback_thumbnail_analysis()
            }
        }
    }

    /// Run the fixed enhancement chain on a base64 image.
    ///
    /// On any failure the original `image` string is handed back untouched
    /// with `success: false`.
    #[tracing::instrument(skip_all)]
    pub async fn enhance_thumbnail_image(
        &self,
        image: String,
        request: EnhancementRequest,
    ) -> EnhancementResult {
        debug!(
            contrast = request.contrast,
            saturation = request.saturation,
            clarity = request.clarity,
            "thumbnail enhancement requested"
        );

        let Ok(permit) = Arc::clone(&self.image_semaphore).acquire_owned().await else {
            warn!("image semaphore closed, returning original thumbnail");
            return EnhancementResult::preserved(image);
        };

        let original = Arc::new(image);
        let input = Arc::clone(&original);
        let outcome = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            enhance_base64_image(&input)
        })
        .await;

        match outcome {
            Ok(Ok(enhanced)) => {
                info!("thumbnail enhancement applied");
                EnhancementResult::enhanced(enhanced)
            }
            Ok(Err(err)) => {
                warn!(error = %err, "thumbnail enhancement failed, returning original");
                EnhancementResult::preserved(Arc::unwrap_or_clone(original))
            }
            Err(err) => {
                warn!(error = %err, "thumbnail enhancement task panicked, returning original");
                EnhancementResult::preserved(Arc::unwrap_or_clone(original))
            }
        }
    }
}
