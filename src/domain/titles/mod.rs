pub mod fallback;
pub mod repair;
pub mod style;
pub mod topics;

pub use fallback::fallback_title_suggestions;
pub use repair::repair_title_payload;
pub use style::TitleStyle;
pub use topics::Topic;

use serde::{Deserialize, Serialize};

/// Every optimization request yields exactly this many suggestions.
pub const SUGGESTION_COUNT: usize = 5;

/// Titles this long (in characters) or longer are truncated before display.
pub const MAX_TITLE_CHARS: usize = 70;

const TRUNCATED_PREFIX_CHARS: usize = 66;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSuggestion {
    pub title: String,
    pub score: f64,
    pub estimated_ctr: f64,
    pub seo_score: f64,
    pub tags: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeTitlesRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSuggestionsResponse {
    pub titles: Vec<TitleSuggestion>,
}

/// Shorten a model-supplied title so it renders in fewer than
/// [`MAX_TITLE_CHARS`] characters.
///
/// The first 66 characters are kept, cut back to the last whitespace run so no
/// word is split, and an ellipsis is appended. A prefix without any whitespace
/// is kept whole.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() < MAX_TITLE_CHARS {
        return title.to_string();
    }

    let prefix = char_prefix(title, TRUNCATED_PREFIX_CHARS);
    format!("{}{ELLIPSIS}", drop_last_word(prefix))
}

/// Like [`truncate_title`], but a cut that already ends a sentence (`.`, `?`
/// or `!`) is kept as-is without an ellipsis.
pub fn truncate_template(title: &str) -> String {
    if title.chars().count() < MAX_TITLE_CHARS {
        return title.to_string();
    }

    let prefix = char_prefix(title, TRUNCATED_PREFIX_CHARS).trim();
    if prefix.ends_with(['.', '?', '!']) {
        return prefix.to_string();
    }
    format!("{}{ELLIPSIS}", drop_last_word(prefix))
}

fn char_prefix(value: &str, chars: usize) -> &str {
    match value.char_indices().nth(chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

fn drop_last_word(value: &str) -> &str {
    match value.rfind(char::is_whitespace) {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}
