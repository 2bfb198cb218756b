//! Redis-backed implementation of link repository.
//!
//! # Data layout
//!
//! - `shorturl:by_url` - hash mapping an original URL to its id
//! - `shorturl:by_id` - hash mapping an id back to the URL
//! - `shorturl:last_id` - counter holding the most recently allocated id
//!
//! Both hashes are only ever written from one Lua script, so they cannot
//! drift apart and concurrent creations of the same URL settle on one id.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, Script, aio::ConnectionManager};
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::{LinkRepository, StoreError};

const KEY_BY_URL: &str = "shorturl:by_url";
const KEY_BY_ID: &str = "shorturl:by_id";
const KEY_LAST_ID: &str = "shorturl:last_id";

/// Looks up the URL and only allocates a fresh id when it is absent.
/// Runs atomically on the server; KEYS are the two hashes plus the
/// counter, ARGV[1] is the URL.
const RESOLVE_OR_CREATE_SCRIPT: &str = r#"
local existing = redis.call('HGET', KEYS[1], ARGV[1])
if existing then
    return existing
end
local id = redis.call('INCR', KEYS[3])
redis.call('HSET', KEYS[1], ARGV[1], id)
redis.call('HSET', KEYS[2], id, ARGV[1])
return id
"#;

/// Redis repository for link storage shared across instances.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Every operation is bounded by a timeout; a slow or unreachable
/// server surfaces as [`StoreError::Unavailable`], never as a hang.
pub struct RedisLinkRepository {
    client: ConnectionManager,
    script: Script,
    op_timeout: Duration,
}

impl RedisLinkRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `op_timeout` - Upper bound applied to every store operation,
    ///   including the validation PING; controlled via `STORE_TIMEOUT_MS`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING does not answer in time.
    pub async fn connect(redis_url: &str, op_timeout: Duration) -> Result<Self, StoreError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let repository = Self {
            client: manager,
            script: Script::new(RESOLVE_OR_CREATE_SCRIPT),
            op_timeout,
        };

        let mut test_conn = repository.client.clone();
        repository.run(test_conn.ping::<()>()).await?;

        info!("✓ Connected to Redis");
        Ok(repository)
    }

    /// Runs one Redis operation under the configured timeout.
    async fn run<T>(
        &self,
        op: impl Future<Output = redis::RedisResult<T>> + Send,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.op_timeout, op).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(map_redis_error(&e)),
            Err(_) => Err(StoreError::Unavailable(format!(
                "redis operation timed out after {}ms",
                self.op_timeout.as_millis()
            ))),
        }
    }
}

/// Redis counters are i64; INCR past the maximum reports an overflow
/// error, which is this backend's id-space boundary.
fn map_redis_error(e: &redis::RedisError) -> StoreError {
    if e.to_string().contains("increment or decrement would overflow") {
        return StoreError::IdSpaceExhausted;
    }
    StoreError::Unavailable(format!("redis error: {}", e))
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn resolve_or_create(&self, url: &str) -> Result<LinkRecord, StoreError> {
        let mut conn = self.client.clone();
        let mut invocation = self.script.prepare_invoke();
        invocation
            .key(KEY_BY_URL)
            .key(KEY_BY_ID)
            .key(KEY_LAST_ID)
            .arg(url);

        let id = self.run(invocation.invoke_async::<u64>(&mut conn)).await?;
        Ok(LinkRecord::new(url, id))
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<LinkRecord>, StoreError> {
        let mut conn = self.client.clone();

        let url: Option<String> = self.run(conn.hget(KEY_BY_ID, id)).await?;
        Ok(url.map(|u| LinkRecord::new(u, id)))
    }

    async fn list_all(&self) -> Result<Vec<LinkRecord>, StoreError> {
        let mut conn = self.client.clone();

        let entries: Vec<(String, String)> = self.run(conn.hgetall(KEY_BY_ID)).await?;

        let mut records = Vec::with_capacity(entries.len());
        for (field, url) in entries {
            match field.parse::<u64>() {
                Ok(id) => records.push(LinkRecord::new(url, id)),
                Err(_) => warn!("Skipping non-numeric id field in {}: {}", KEY_BY_ID, field),
            }
        }
        records.sort_unstable_by_key(|r| r.short_id);
        Ok(records)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        self.run(conn.ping::<()>()).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redis::ErrorKind;

    #[test]
    fn test_counter_overflow_maps_to_exhausted() {
        let error = redis::RedisError::from((
            ErrorKind::Extension,
            "ERR",
            "increment or decrement would overflow".to_string(),
        ));

        assert_eq!(map_redis_error(&error), StoreError::IdSpaceExhausted);
    }

    #[test]
    fn test_other_errors_map_to_unavailable() {
        let error = redis::RedisError::from((ErrorKind::Io, "broken pipe"));

        assert!(matches!(
            map_redis_error(&error),
            StoreError::Unavailable(_)
        ));
    }
}
