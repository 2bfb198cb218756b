//! Handler for listing stored short URLs.

use axum::{Json, extract::State};

use crate::api::dto::shorturl::ShortUrlBody;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored mapping, oldest first.
///
/// # Endpoint
///
/// `GET /api/shorturl`
///
/// # Response
///
/// A JSON array ordered by ascending id, which is allocation order:
///
/// ```json
/// [
///   { "original_url": "https://example.com", "short_url": 1 },
///   { "original_url": "https://example.org", "short_url": 2 }
/// ]
/// ```
///
/// The array is a snapshot; an empty store answers `[]`.
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShortUrlBody>>, AppError> {
    let records = state.link_service.list().await?;
    Ok(Json(records.into_iter().map(ShortUrlBody::from).collect()))
}
