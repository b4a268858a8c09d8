pub mod thumbnails;
pub mod titles;

// Re-exports
pub use thumbnails::{
    AnalyzeThumbnailRequest, EnhanceThumbnailRequest, EnhancementRequest, EnhancementResult,
    ThumbnailAnalysis,
};
pub use titles::{
    OptimizeTitlesRequest, TitleStyle, TitleSuggestion, TitleSuggestionsResponse, Topic,
};
