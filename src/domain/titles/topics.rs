use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::SUGGESTION_COUNT;
use super::style::TitleStyle;

type Templates = [&'static str; SUGGESTION_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Investment,
    StockMarket,
    Cooking,
    Gaming,
    Technology,
    Generic,
}

struct TopicRule {
    topic: Topic,
    pattern: &'static str,
    english: Templates,
    hinglish: Templates,
}

/// Evaluated top to bottom; the first rule whose pattern matches wins.
static TOPIC_RULES: [TopicRule; 5] = [
    TopicRule {
        topic: Topic::Investment,
        pattern: r"(?i)sip|investment|mutual\s*fund|fund",
        english: [
            "How I Made Money with SIPs - Real Experience",
            "SIP Investment for Beginners - Simple Guide",
            "My SIP Journey After 5 Years - Honest Review",
            "Should You Start SIP Investment in 2025?",
            "SIP Investment Mistakes I Made (Learn from Me)",
        ],
        hinglish: [
            "मैंने SIP Se Kitna Paisa Banaya? Real Returns",
            "SIP Investment Kaise Start Kare - Easy Guide",
            "Meri SIP Journey - 5 Saal Baad Kitna Profit?",
            "SIP Me Invest Karna Chahiye Ya Nahi?",
            "SIP Se Paise Double Kaise Kare - Secret Tips",
        ],
    },
    TopicRule {
        topic: Topic::StockMarket,
        pattern: r"(?i)share|stock|market|trading|equity|invest",
        english: [
            "How to Make Money in Stock Market - Beginner Guide",
            "Stock Market Tips That Actually Work",
            "My Stock Market Journey - Wins and Losses",
            "Stock Market for Beginners - Start Here",
            "Safe Stock Market Investment Strategy",
        ],
        hinglish: [
            "Share Market Me Paise Kaise Banaye - Asaan Tarika",
            "Beginner Ke Liye Share Market Tips",
            "मैंने Share Market Se Kitna Kamaya?",
            "Share Market Start Karne Se Pehle Ye Dekho",
            "Share Market Me Safe Investment Kaise Kare",
        ],
    },
    TopicRule {
        topic: Topic::Cooking,
        pattern: r"(?i)cook|recipe|food|dish|banaye|bana",
        english: [
            "Easy Recipe Anyone Can Make at Home",
            "Restaurant Style Dish - Made Simple",
            "Quick Recipe Ready in 10 Minutes",
            "Secret Recipe That Never Fails",
            "My Mom's Recipe - You'll Love This",
        ],
        hinglish: [
            "Ghar Pe Banaye Restaurant Jaisa Khana",
            "आसान Recipe - 10 Minute Me Ready!",
            "Secret Recipe Jo Sabko Pasand Aayegi",
            "Perfect Dish Banane Ka Tarika",
            "Mummy Ki Recipe - Try Karo Zaroor",
        ],
    },
    TopicRule {
        topic: Topic::Gaming,
        pattern: r"(?i)game|gaming|play|player|level",
        english: [
            "How to Make Money Gaming - Real Ways",
            "Pro Gaming Tips That Actually Work",
            "Best Budget Gaming Setup Guide",
            "Gaming Tricks Every Player Should Know",
            "How Much I Earn from Gaming",
        ],
        hinglish: [
            "Gaming Se Paise Kaise Kamaye - Real Tips",
            "Pro Gamer Banne Ka Secret",
            "Best Gaming Setup Under Budget",
            "Gaming Tips Jo Kaam Aayenge",
            "मैं Gaming Se Kitna Kamata Hun?",
        ],
    },
    TopicRule {
        topic: Topic::Technology,
        pattern: r"(?i)tech|mobile|phone|app|software|computer",
        english: [
            "Tech Tips That Will Change Your Life",
            "Best Mobile Settings You Should Know",
            "Tech Hacks Everyone Should Try",
            "New Technology Review - Worth It?",
            "Tech Buying Guide - My Honest Opinion",
        ],
        hinglish: [
            "Best Tech Tips For Everyone",
            "Mobile Me Ye Setting Karo - Game Changer",
            "Tech Hacks Jo Life Easy Bana Denge",
            "नई Technology - Kya Faida Hai?",
            "Tech Review - Lena Chahiye Ya Nahi?",
        ],
    },
];

const GENERIC_ENGLISH_SUFFIXES: Templates = [
    " - My Honest Experience",
    " - Step by Step Guide",
    " - The Real Truth",
    " - Does It Actually Work?",
    " - Easy Tips and Tricks",
];

const GENERIC_HINGLISH_SUFFIXES: Templates = [
    " - Mera Experience",
    " Kaise Kare - Step by Step",
    " Ka Truth - Honest Review",
    " - Kya Really Work Karta Hai?",
    " - Easy Tips Aur Tricks",
];

const GENERIC_STEM_WORDS: usize = 4;

impl Topic {
    pub fn classify(title: &str) -> Self {
        compiled_rules()
            .iter()
            .find(|(pattern, _)| pattern.is_match(title))
            .map_or(Self::Generic, |(_, rule)| rule.topic)
    }

    /// Untruncated suggestion templates for this topic. The generic topic
    /// builds its templates from the first words of `title`.
    pub fn templates(self, style: TitleStyle, title: &str) -> Vec<String> {
        if let Some(rule) = TOPIC_RULES.iter().find(|rule| rule.topic == self) {
            let templates = match style {
                TitleStyle::English => &rule.english,
                TitleStyle::Hinglish => &rule.hinglish,
            };
            return templates.iter().map(|t| (*t).to_string()).collect();
        }

        let stem = title
            .split(' ')
            .take(GENERIC_STEM_WORDS)
            .collect::<Vec<_>>()
            .join(" ");
        let suffixes = match style {
            TitleStyle::English => &GENERIC_ENGLISH_SUFFIXES,
            TitleStyle::Hinglish => &GENERIC_HINGLISH_SUFFIXES,
        };
        suffixes
            .iter()
            .map(|suffix| format!("{stem}{suffix}"))
            .collect()
    }
}

#[allow(clippy::expect_used)] // Static patterns: a compile failure is a programming error
fn compiled_rules() -> &'static [(Regex, &'static TopicRule)] {
    static RULES: OnceLock<Vec<(Regex, &'static TopicRule)>> = OnceLock::new();
    RULES.get_or_init(|| {
        TOPIC_RULES
            .iter()
            .map(|rule| {
                let pattern = Regex::new(rule.pattern).expect("topic pattern should compile");
                (pattern, rule)
            })
            .collect()
    })
}
