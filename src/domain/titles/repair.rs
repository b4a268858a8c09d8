use serde_json::Value;

use super::{SUGGESTION_COUNT, TitleSuggestion, fallback_title_suggestions, truncate_title};

const DEFAULT_SCORE: f64 = 7.0;
const DEFAULT_ESTIMATED_CTR: f64 = 25.0;
const DEFAULT_REASONING: &str = "Optimized for better click-through rate";

/// Outcome of parsing one field of a model-supplied suggestion.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Valid(T),
    Invalid,
    Missing,
}

impl<T> Field<T> {
    fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid | Self::Missing => default,
        }
    }
}

/// A suggestion as the model returned it: the title is known to be usable,
/// every other field still needs repair.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCandidate {
    pub title: String,
    pub score: Field<f64>,
    pub estimated_ctr: Field<f64>,
    pub seo_score: Field<f64>,
    pub tags: Field<Vec<String>>,
    pub reasoning: Field<String>,
}

impl TitleCandidate {
    /// Returns `None` for entries that are not objects or have no usable title.
    pub fn parse(entry: &Value) -> Option<Self> {
        let object = entry.as_object()?;
        let title = object
            .get("title")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|title| !title.is_empty())?;

        Some(Self {
            title: title.to_string(),
            score: number_field(object.get("score")),
            estimated_ctr: number_field(object.get("estimatedCtr")),
            seo_score: number_field(object.get("seoScore")),
            tags: tags_field(object.get("tags")),
            reasoning: text_field(object.get("reasoning")),
        })
    }

    pub fn repair(self) -> TitleSuggestion {
        TitleSuggestion {
            title: truncate_title(&self.title),
            score: self.score.unwrap_or(DEFAULT_SCORE).clamp(1.0, 10.0),
            estimated_ctr: self
                .estimated_ctr
                .unwrap_or(DEFAULT_ESTIMATED_CTR)
                .clamp(0.0, 100.0),
            seo_score: self.seo_score.unwrap_or(DEFAULT_SCORE).clamp(1.0, 10.0),
            tags: self.tags.unwrap_or_default(),
            reasoning: self
                .reasoning
                .unwrap_or_else(|| DEFAULT_REASONING.to_string()),
        }
    }
}

impl<T: Default> Field<T> {
    fn unwrap_or_default(self) -> T {
        self.unwrap_or(T::default())
    }
}

impl Field<String> {
    fn unwrap_or_else(self, default: impl FnOnce() -> String) -> String {
        match self {
            Self::Valid(value) => value,
            Self::Invalid | Self::Missing => default(),
        }
    }
}

/// Turn whatever the model returned for `titles` into exactly
/// [`SUGGESTION_COUNT`] well-formed suggestions.
///
/// A payload that is not an array is discarded in favour of the fallback set.
/// Otherwise unusable entries are dropped, the rest repaired field by field,
/// and any shortfall is backfilled from the fallback set for the same title.
pub fn repair_title_suggestions(titles: &Value, original_title: &str) -> Vec<TitleSuggestion> {
    let Some(entries) = titles.as_array() else {
        return fallback_title_suggestions(original_title);
    };

    let mut suggestions: Vec<TitleSuggestion> = entries
        .iter()
        .filter_map(TitleCandidate::parse)
        .map(TitleCandidate::repair)
        .take(SUGGESTION_COUNT)
        .collect();

    if suggestions.len() < SUGGESTION_COUNT {
        let needed = SUGGESTION_COUNT - suggestions.len();
        suggestions.extend(
            fallback_title_suggestions(original_title)
                .into_iter()
                .take(needed),
        );
    }

    suggestions.truncate(SUGGESTION_COUNT);
    suggestions
}

/// Repair a full model response object. A missing `titles` key counts as an
/// empty list.
pub fn repair_title_payload(payload: &Value, original_title: &str) -> Vec<TitleSuggestion> {
    match payload.get("titles") {
        Some(titles) => repair_title_suggestions(titles, original_title),
        None => repair_title_suggestions(&Value::Array(Vec::new()), original_title),
    }
}

/// Zero counts as absent and takes the field's default.
fn number_field(value: Option<&Value>) -> Field<f64> {
    match value {
        None | Some(Value::Null) => Field::Missing,
        Some(value) => match value.as_f64() {
            Some(number) if number.abs() < f64::EPSILON || !number.is_finite() => Field::Missing,
            Some(number) => Field::Valid(number),
            None => Field::Invalid,
        },
    }
}

fn tags_field(value: Option<&Value>) -> Field<Vec<String>> {
    match value {
        None | Some(Value::Null) => Field::Missing,
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map_or(Field::Invalid, Field::Valid),
        Some(_) => Field::Invalid,
    }
}

fn text_field(value: Option<&Value>) -> Field<String> {
    match value {
        None | Some(Value::Null) => Field::Missing,
        Some(Value::String(text)) if !text.trim().is_empty() => Field::Valid(text.clone()),
        Some(_) => Field::Invalid,
    }
}
