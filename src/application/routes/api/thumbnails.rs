use axum::Json;
use axum::extract::State;

use crate::application::errors::ApiError;
use crate::application::routes::support::{FlexiblePayload, require_non_blank};
use crate::application::state::AppState;
use crate::domain::thumbnails::{
    AnalyzeThumbnailRequest, EnhanceThumbnailRequest, EnhancementResult, ThumbnailAnalysis,
};

#[tracing::instrument(skip(state, payload))]
pub(crate) async fn analyze_thumbnail(
    State(state): State<AppState>,
    payload: FlexiblePayload<AnalyzeThumbnailRequest>,
) -> Result<Json<ThumbnailAnalysis>, ApiError> {
    let FlexiblePayload(request) = payload;
    let image = require_non_blank(&request.image, "image")?;

    Ok(Json(state.thumbnail_service.analyze_thumbnail(image).await))
}

/// Always answers 200 once the image is present; a failed enhancement is
/// reported in the body with the original image echoed back.
#[tracing::instrument(skip(state, payload))]
pub(crate) async fn enhance_thumbnail(
    State(state): State<AppState>,
    payload: FlexiblePayload<EnhanceThumbnailRequest>,
) -> Result<Json<EnhancementResult>, ApiError> {
    let FlexiblePayload(request) = payload;
    require_non_blank(&request.image, "image")?;

    let result = state
        .thumbnail_service
        .enhance_thumbnail_image(request.image, request.enhancements)
        .await;

    Ok(Json(result))
}
