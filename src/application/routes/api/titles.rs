use axum::Json;
use axum::extract::State;

use crate::application::errors::ApiError;
use crate::application::routes::support::{FlexiblePayload, require_non_blank};
use crate::application::state::AppState;
use crate::domain::titles::{OptimizeTitlesRequest, TitleSuggestionsResponse};

#[tracing::instrument(skip(state, payload))]
pub(crate) async fn optimize_titles(
    State(state): State<AppState>,
    payload: FlexiblePayload<OptimizeTitlesRequest>,
) -> Result<Json<TitleSuggestionsResponse>, ApiError> {
    let FlexiblePayload(request) = payload;
    let title = require_non_blank(&request.title, "title")?;

    let titles = state
        .title_service
        .optimize_titles(title, request.thumbnail_context.as_deref())
        .await;

    Ok(Json(TitleSuggestionsResponse { titles }))
}
