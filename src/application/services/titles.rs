use tracing::{info, warn};

use crate::domain::titles::{TitleSuggestion, fallback_title_suggestions, repair_title_payload};
use crate::infrastructure::ai::CompletionClient;
use crate::infrastructure::ai::prompts::{TITLE_MAX_TOKENS, title_messages};

/// Title optimization pipeline: prompt, remote completion, repair, with the
/// deterministic fallback standing in whenever the model cannot be used.
#[derive(Debug, Clone)]
pub struct TitleService {
    ai: CompletionClient,
}

impl TitleService {
    pub fn new(ai: CompletionClient) -> Self {
        Self { ai }
    }

    /// Always returns exactly five suggestions, best first.
    #[tracing::instrument(skip(self, thumbnail_context))]
    pub async fn optimize_titles(
        &self,
        original_title: &str,
        thumbnail_context: Option<&str>,
    ) -> Vec<TitleSuggestion> {
        if !self.ai.is_configured() {
            info!("AI API key not configured, using fallback title suggestions");
            return fallback_title_suggestions(original_title);
        }

        let messages = title_messages(original_title, thumbnail_context);
        match self.ai.complete_json(messages, TITLE_MAX_TOKENS).await {
            Ok(payload) => repair_title_payload(&payload, original_title),
            Err(err) => {
                warn!(error = %err, "title optimization failed, using fallback suggestions");
                fallback_title_suggestions(original_title)
            }
        }
    }
}
