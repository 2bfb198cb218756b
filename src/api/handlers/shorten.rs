//! Handler for the shorten endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
};
use url::form_urlencoded;

use crate::api::dto::shorturl::{ShortUrlBody, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or re-resolves) a short URL for the submitted address.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON or form-encoded, either way a single `url` field:
///
/// ```json
/// { "url": "https://www.example.com/page" }
/// ```
///
/// Requests without a `Content-Type` are sniffed: a body that parses as
/// JSON is treated as JSON, anything else as form fields.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.example.com/page", "short_url": 1 }
/// ```
///
/// Submitting an already-known URL answers with its existing id.
///
/// # Errors
///
/// A missing or unusable body is 400 with a message. A body whose `url`
/// fails validation is, per the API contract, `200 OK` with
/// `{"error": "invalid url"}`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ShortUrlBody>, AppError> {
    let url = extract_url(&headers, &body)?;

    let record = state.link_service.shorten(&url).await?;
    Ok(Json(ShortUrlBody::from(record)))
}

/// Pulls the `url` field out of a JSON or form-encoded request body.
///
/// The declared `Content-Type` wins when present; otherwise the body is
/// sniffed, JSON first.
fn extract_url(headers: &HeaderMap, body: &[u8]) -> Result<String, AppError> {
    if body.is_empty() {
        return Err(AppError::invalid_request("Request body is required"));
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.contains("application/json") {
        return url_from_json(body);
    }
    if content_type.contains("application/x-www-form-urlencoded") {
        return url_from_form(body);
    }

    if serde_json::from_slice::<serde_json::Value>(body).is_ok() {
        url_from_json(body)
    } else {
        url_from_form(body)
    }
}

fn url_from_json(body: &[u8]) -> Result<String, AppError> {
    match serde_json::from_slice::<ShortenRequest>(body) {
        Ok(request) if !request.url.is_empty() => Ok(request.url),
        Ok(_) => Err(AppError::invalid_request("url is required")),
        // Data errors are well-formed JSON without a usable `url` field.
        Err(e) if e.classify() == serde_json::error::Category::Data => {
            Err(AppError::invalid_request("url is required"))
        }
        Err(_) => Err(AppError::invalid_request("Invalid request body")),
    }
}

fn url_from_form(body: &[u8]) -> Result<String, AppError> {
    form_urlencoded::parse(body)
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::invalid_request("url is required"))
}
