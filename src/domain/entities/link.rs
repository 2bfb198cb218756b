//! Link entity representing a shortened URL mapping.

/// A stored mapping between an original URL and its numeric short id.
///
/// Ids are allocated sequentially starting at 1, so a record's id doubles
/// as its position in insertion order. The original URL is kept exactly as
/// submitted, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub original_url: String,
    pub short_id: u64,
}

impl LinkRecord {
    /// Creates a new LinkRecord instance.
    pub fn new(original_url: impl Into<String>, short_id: u64) -> Self {
        Self {
            original_url: original_url.into(),
            short_id,
        }
    }
}
