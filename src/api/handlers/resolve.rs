//! Handler for short URL resolution.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::shorturl::ShortUrlBody;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short id to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{id}`
///
/// # Content Negotiation
///
/// Browsers get a 307 redirect whose `Location` is the stored URL, byte
/// for byte. Clients sending `Accept: application/json` get the record
/// itself:
///
/// ```json
/// { "original_url": "https://www.example.com/page", "short_url": 1 }
/// ```
///
/// # Errors
///
/// Returns 400 `{"error": "Invalid short URL"}` when `{id}` is not a
/// base-10 integer, and 404 `{"error": "Short URL not found"}` when it
/// was never allocated.
pub async fn resolve_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    // Parsed by hand so a bad id renders the contract body, not the
    // extractor's default rejection.
    let id: u64 = id.parse().map_err(|_| AppError::InvalidIdentifier)?;

    let record = state.link_service.resolve(id).await?;

    if wants_json(&headers) {
        Ok(Json(ShortUrlBody::from(record)).into_response())
    } else {
        redirect_to(&record.original_url)
    }
}

/// 307 whose `Location` is the stored URL, byte for byte.
///
/// Built by hand: stored URLs passed only the scheme check, and one
/// carrying bytes a header value cannot hold must answer as a server
/// error, not a handler panic.
fn redirect_to(url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::try_from(url).map_err(|_| {
        AppError::internal(format!(
            "stored URL not representable as Location: {:?}",
            url
        ))
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

/// True when the client asked for the record rather than a redirect.
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.to_ascii_lowercase().contains("application/json"))
}
