use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const DEVANAGARI: std::ops::RangeInclusive<char> = '\u{0900}'..='\u{097F}';

const HINGLISH_WORDS: &[&str] = &[
    "kaise", "kya", "kare", "banaye", "me", "se", "ka", "ki", "ke", "hai", "ho", "bhi", "aur", "ya",
    "tha", "the", "kar", "liye", "wala", "wali",
];

/// Writing style of a title. Suggestions always match the style of their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleStyle {
    English,
    Hinglish,
}

impl TitleStyle {
    /// Devanagari script or a common Hindi function word marks a title as Hinglish.
    pub fn detect(title: &str) -> Self {
        let has_devanagari = title.chars().any(|c| DEVANAGARI.contains(&c));
        if has_devanagari || hinglish_pattern().is_match(title) {
            Self::Hinglish
        } else {
            Self::English
        }
    }

    pub fn tags(self) -> &'static [&'static str] {
        match self {
            Self::English => &["guide", "tips", "tutorial", "review"],
            Self::Hinglish => &["hinglish", "desi", "guide", "tips"],
        }
    }
}

#[allow(clippy::expect_used)] // Static pattern: a compile failure is a programming error
fn hinglish_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"(?i)\b(?:{})\b", HINGLISH_WORDS.join("|")))
            .expect("hinglish word pattern should compile")
    })
}
