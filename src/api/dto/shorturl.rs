//! DTOs for the short URL endpoints.

use crate::domain::entities::LinkRecord;
use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// Arrives as JSON or as an `application/x-www-form-urlencoded` field;
/// both carry one `url` value.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten (must start with `http://` or `https://`).
    pub url: String,
}

/// Wire representation of one stored mapping.
///
/// Returned on creation, on JSON-negotiated resolution, and as the element
/// type of the listing. `short_url` is the numeric id, serialized as a
/// bare JSON number.
#[derive(Debug, Serialize)]
pub struct ShortUrlBody {
    pub original_url: String,
    pub short_url: u64,
}

impl From<LinkRecord> for ShortUrlBody {
    fn from(record: LinkRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_id,
        }
    }
}
