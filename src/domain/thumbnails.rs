use serde::{Deserialize, Serialize};

pub const ENHANCEMENT_SUCCESS_MESSAGE: &str = "Natural enhancement applied successfully! Your thumbnail now has clearer facial features, a brightness boost, vibrant colors and sharper detail while keeping a natural look.";
pub const ENHANCEMENT_FAILURE_MESSAGE: &str = "Enhancement could not be applied to maintain image quality. Your original thumbnail has been preserved without any changes.";

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnhancementSuggestions {
    pub contrast: f64,
    pub saturation: f64,
    pub clarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailAnalysis {
    pub enhancement_suggestions: EnhancementSuggestions,
    pub ctr_improvement: f64,
    pub description: String,
    pub recommendations: Vec<String>,
}

impl ThumbnailAnalysis {
    /// Pull suggested percentages back into `[0, 100]`.
    pub fn clamped(mut self) -> Self {
        let s = &mut self.enhancement_suggestions;
        s.contrast = s.contrast.clamp(0.0, 100.0);
        s.saturation = s.saturation.clamp(0.0, 100.0);
        s.clarity = s.clarity.clamp(0.0, 100.0);
        self
    }
}

/// Static analysis returned when the model is unavailable.
pub fn fallback_thumbnail_analysis() -> ThumbnailAnalysis {
    ThumbnailAnalysis {
        enhancement_suggestions: EnhancementSuggestions {
            contrast: 8.0,
            saturation: 6.0,
            clarity: 9.0,
        },
        ctr_improvement: 25.0,
        description: "Professional studio-quality enhancement applied. Your thumbnail now has improved clarity, natural color balance, and refined details while maintaining complete originality.".to_string(),
        recommendations: [
            "Gentle contrast boost for better definition without altering tone",
            "Natural color enhancement for improved vividness",
            "Subtle clarity improvement for HD professional look",
            "Refined details and smooth edges for premium appearance",
            "Studio-quality polish while preserving original design",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
    }
}

/// Requested adjustment percentages. Accepted for API compatibility; the
/// enhancement chain itself is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementRequest {
    pub contrast: f64,
    pub saturation: f64,
    pub clarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementResult {
    /// Base64-encoded image; the caller's original input when `success` is false.
    pub enhanced_image: String,
    pub success: bool,
    pub message: String,
}

impl EnhancementResult {
    pub fn enhanced(enhanced_image: String) -> Self {
        Self {
            enhanced_image,
            success: true,
            message: ENHANCEMENT_SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn preserved(original_image: String) -> Self {
        Self {
            enhanced_image: original_image,
            success: false,
            message: ENHANCEMENT_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeThumbnailRequest {
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceThumbnailRequest {
    pub image: String,
    #[serde(default)]
    pub enhancements: EnhancementRequest,
}

/// Strip a `data:<mime>;base64,` prefix if present.
pub fn strip_data_url(image: &str) -> &str {
    let trimmed = image.trim();
    match trimmed.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(trimmed, |(_, data)| data),
        None => trimmed,
    }
}

/// Render an image as a `data:` URI, treating bare base64 as JPEG.
pub fn image_data_url(image: &str) -> String {
    let trimmed = image.trim();
    if trimmed.starts_with("data:") {
        trimmed.to_string()
    } else {
        format!("data:{DEFAULT_IMAGE_MIME};base64,{trimmed}")
    }
}
