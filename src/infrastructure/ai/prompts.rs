use crate::domain::thumbnails::image_data_url;
use crate::domain::titles::{MAX_TITLE_CHARS, SUGGESTION_COUNT};

use super::{ContentPart, ImageUrlDetail, Message};

/// Generation budget for title suggestions.
pub const TITLE_MAX_TOKENS: u32 = 2500;
/// Generation budget for thumbnail analysis.
pub const THUMBNAIL_MAX_TOKENS: u32 = 1000;

const THUMBNAIL_SYSTEM_PROMPT: &str = r#"You are a YouTube thumbnail optimization expert. Analyze the provided thumbnail image and suggest enhancements to improve click-through rates.

Respond with JSON in this exact format:
{
  "enhancementSuggestions": {
    "contrast": number (0-100, percentage increase needed),
    "saturation": number (0-100, percentage increase needed),
    "clarity": number (0-100, percentage increase needed)
  },
  "ctrImprovement": number (estimated percentage CTR improvement),
  "description": "string (detailed analysis of current thumbnail)",
  "recommendations": ["array", "of", "specific", "improvement", "suggestions"]
}"#;

const THUMBNAIL_USER_PROMPT: &str = "Analyze this YouTube thumbnail and provide enhancement recommendations to maximize click-through rates.";

/// System and user messages asking for title suggestions in the same
/// language style as `original_title`.
///
/// `thumbnail_context`, when given, is placed directly ahead of the output
/// format instructions. The title is passed through as-is.
pub fn title_messages(original_title: &str, thumbnail_context: Option<&str>) -> Vec<Message> {
    vec![
        Message::system(title_system_prompt(thumbnail_context)),
        Message::user_text(format!(
            "Original title: \"{original_title}\"\n\nGenerate exactly {SUGGESTION_COUNT} powerful, human-friendly, and clickable titles that work in the same language as the original."
        )),
    ]
}

pub fn thumbnail_messages(image: &str) -> Vec<Message> {
    vec![
        Message::system(THUMBNAIL_SYSTEM_PROMPT.to_string()),
        Message::user_parts(vec![
            ContentPart::Text {
                text: THUMBNAIL_USER_PROMPT.to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrlDetail {
                    url: image_data_url(image),
                },
            },
        ]),
    ]
}

fn title_system_prompt(thumbnail_context: Option<&str>) -> String {
    let context = thumbnail_context
        .map(str::trim)
        .filter(|context| !context.is_empty())
        .map(|context| format!("Thumbnail context: {context}\n\n"))
        .unwrap_or_default();

    format!(
        r#"You are a professional YouTube SEO & Title Expert. When a user provides a YouTube video title, generate **EXACTLY {SUGGESTION_COUNT} new title suggestions**.

### CRITICAL RULES:

1. **Language Detection:** Automatically detect the EXACT language/style of the original title.
   * If input is in English → Output in English
   * If input is in Hindi → Output in Hindi
   * If input is in Hinglish (Hindi+English mix) → Output in same Hinglish style
   * NEVER change the language style - match it exactly!

2. **100% Human-Friendly & Conversational:**
   * Write like a real person talking to friends, not like AI or corporate content
   * Use natural, everyday language that people actually speak
   * Include casual phrases, emotions, and relatable expressions
   * Sound like a popular YouTuber from that language community

3. **Highly Clickable but Natural:**
   * Create curiosity without being clickbait
   * Use emotional hooks but keep them genuine
   * Include personal elements ("मेरा", "My", "I tried", "मैंने किया")

4. **SEO + Local Language Patterns:**
   * For English: Use trending YouTube keywords naturally
   * For Hindi/Hinglish: Mix popular Hindi phrases with English keywords
   * Include the year only if relevant

5. **Stay True to Original Topic:** Do NOT change the video topic or mislead.

6. **Length:** Keep under **{MAX_TITLE_CHARS} characters** for better YouTube display.

### EXAMPLES:
Input (English): "How to invest in stocks"
Output: Natural English titles like "Stock Investment Made Simple for Beginners"

Input (Hinglish): "Share market me paise kaise banaye"
Output: Same Hinglish style like "Share Market Se Paise Banane Ka Asaan Tarika"

{context}Respond with JSON in this exact format:
{{
  "titles": [
    {{
      "title": "optimized title text",
      "score": number (1-10 overall quality score),
      "estimatedCtr": number (percentage improvement over original),
      "seoScore": number (1-10 SEO optimization score),
      "tags": ["relevant", "keywords", "array"],
      "reasoning": "explanation of why this title works"
    }}
  ]
}}"#
    )
}
