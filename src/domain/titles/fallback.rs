use std::sync::OnceLock;

use regex::Regex;

use super::style::TitleStyle;
use super::topics::Topic;
use super::{TitleSuggestion, truncate_template};

const REASONING: [&str; 5] = [
    "Human-friendly title with personal experience and relatability",
    "Human-friendly title with clear guidance and step-by-step approach",
    "Human-friendly title with honesty and trustworthiness",
    "Human-friendly title with curiosity and validation",
    "Human-friendly title with practical value and actionability",
];

/// Deterministic suggestions used whenever the model cannot be consulted.
///
/// Pure function of `original_title`: the title is stripped of a leading
/// filler word, classified by style and topic, and the matching template set
/// is scored in descending rank order.
pub fn fallback_title_suggestions(original_title: &str) -> Vec<TitleSuggestion> {
    let cleaned = strip_filler(original_title);
    let style = TitleStyle::detect(cleaned);
    let topic = Topic::classify(cleaned);

    let tags: Vec<String> = style.tags().iter().map(|t| (*t).to_string()).collect();

    topic
        .templates(style, cleaned)
        .iter()
        .zip(REASONING)
        .zip(0u8..)
        .map(|((template, reasoning), rank)| TitleSuggestion {
            title: truncate_template(template),
            score: f64::from(95 - rank) / 10.0,
            estimated_ctr: f64::from(50 - 2 * rank),
            seo_score: f64::from(90 - rank) / 10.0,
            tags: tags.clone(),
            reasoning: reasoning.to_string(),
        })
        .collect()
}

#[allow(clippy::expect_used)] // Static pattern: a compile failure is a programming error
fn strip_filler(title: &str) -> &str {
    static FILLER: OnceLock<Regex> = OnceLock::new();
    let filler = FILLER.get_or_init(|| {
        Regex::new(r"(?i)^(?:playing|watch|video)\s+").expect("filler pattern should compile")
    });

    let stripped = match filler.find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    };
    stripped.trim()
}
