//! In-memory implementation of link repository.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::{LinkRepository, StoreError};

const FIRST_ID: u64 = 1;

/// The two indexes plus the allocation cursor, guarded as one unit.
///
/// `by_url` and `by_id` always describe the same set of records, and
/// `next_id` always holds the next free id. Mutations go through
/// [`Indexes::resolve_or_insert`], which upholds both.
#[derive(Debug)]
struct Indexes {
    by_url: HashMap<Arc<str>, u64>,
    by_id: BTreeMap<u64, Arc<str>>,
    next_id: u64,
}

impl Indexes {
    fn new() -> Self {
        Self {
            by_url: HashMap::new(),
            by_id: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }

    fn resolve_or_insert(&mut self, url: &str) -> Result<LinkRecord, StoreError> {
        if let Some(&id) = self.by_url.get(url) {
            return Ok(LinkRecord::new(url, id));
        }

        // id u64::MAX is never allocated; next_id always stays valid.
        let id = self.next_id;
        let next = id.checked_add(1).ok_or(StoreError::IdSpaceExhausted)?;

        let key: Arc<str> = Arc::from(url);
        self.by_url.insert(Arc::clone(&key), id);
        self.by_id.insert(id, key);
        self.next_id = next;

        Ok(LinkRecord::new(url, id))
    }
}

/// In-process repository backed by two indexes under a single lock.
///
/// A `HashMap` keyed by URL answers the dedup check and a `BTreeMap` keyed
/// by id keeps records in allocation order for snapshots. Both live behind
/// one `RwLock`, so lookups run concurrently while the check-allocate-insert
/// sequence holds the write guard and is observed all-or-nothing.
pub struct MemoryLinkRepository {
    indexes: RwLock<Indexes>,
}

impl MemoryLinkRepository {
    /// Creates an empty store. The first allocated id is 1.
    pub fn new() -> Self {
        Self {
            indexes: RwLock::new(Indexes::new()),
        }
    }

    /// Creates a store pre-populated with `urls`, ids assigned in iteration
    /// order starting at 1. Duplicates collapse onto their first id, exactly
    /// as live submissions do.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] if the iterator carries more
    /// distinct URLs than there are ids.
    pub fn with_urls<I>(urls: I) -> Result<Self, StoreError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut indexes = Indexes::new();
        for url in urls {
            indexes.resolve_or_insert(url.as_ref())?;
        }
        Ok(Self {
            indexes: RwLock::new(indexes),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Indexes>, StoreError> {
        self.indexes
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Indexes>, StoreError> {
        self.indexes
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn resolve_or_create(&self, url: &str) -> Result<LinkRecord, StoreError> {
        let mut indexes = self.write()?;
        indexes.resolve_or_insert(url)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<LinkRecord>, StoreError> {
        let indexes = self.read()?;
        Ok(indexes
            .by_id
            .get(&id)
            .map(|url| LinkRecord::new(url.as_ref(), id)))
    }

    async fn list_all(&self) -> Result<Vec<LinkRecord>, StoreError> {
        let indexes = self.read()?;
        Ok(indexes
            .by_id
            .iter()
            .map(|(&id, url)| LinkRecord::new(url.as_ref(), id))
            .collect())
    }

    async fn health_check(&self) -> bool {
        self.indexes.read().is_ok()
    }
}
