//! Shared data-fetching cache.
//!
//! One [`QueryClient`] exists per process. Pages reach it through context
//! (see [`provider`]) and share cached responses and invalidations through it.

mod provider;

pub use provider::{QueryClientProvider, QueryHandle, use_query, use_query_client};

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::api::http;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Fetch(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Hierarchical cache key, e.g. `["elections", "42"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<S: Into<String>>(parts: impl IntoIterator<Item = S>) -> Self {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// Part-wise prefix test. The empty key is a prefix of every key.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// How long fetched data is served without refetching.
    pub stale_time: TimeDelta,
    /// Entries not written for this long are dropped on the next write.
    pub gc_time: TimeDelta,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time: TimeDelta::seconds(30),
            gc_time: TimeDelta::minutes(5),
        }
    }
}

struct CacheEntry {
    data: serde_json::Value,
    updated_at: DateTime<Utc>,
    invalidated: bool,
}

struct Inner {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
    generation: AtomicU64,
    options: QueryOptions,
}

/// Handle to the process-wide cache. Cloning shares the same cache.
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<Inner>,
}

static SHARED: OnceLock<QueryClient> = OnceLock::new();

impl QueryClient {
    /// The single process-wide client. There is no other way to obtain one.
    pub fn shared() -> QueryClient {
        SHARED
            .get_or_init(|| QueryClient::with_options(QueryOptions::default()))
            .clone()
    }

    fn with_options(options: QueryOptions) -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: RwLock::new(HashMap::new()),
                generation: AtomicU64::new(0),
                options,
            }),
        }
    }

    pub fn options(&self) -> QueryOptions {
        self.inner.options
    }

    pub fn same_instance(&self, other: &QueryClient) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Cached data for `key`, stale or not.
    pub fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.inner.entries.read().ok()?;
        let entry = entries.get(key)?;
        serde_json::from_value(entry.data.clone()).ok()
    }

    pub fn set_query_data<T: Serialize>(&self, key: &QueryKey, data: &T) -> Result<(), QueryError> {
        let value = serde_json::to_value(data).map_err(|e| QueryError::Decode(e.to_string()))?;
        self.store(key, value, Utc::now());
        Ok(())
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.is_stale_at(key, Utc::now())
    }

    fn is_stale_at(&self, key: &QueryKey, now: DateTime<Utc>) -> bool {
        let Ok(entries) = self.inner.entries.read() else {
            return true;
        };
        match entries.get(key) {
            Some(entry) => entry.invalidated || now - entry.updated_at >= self.inner.options.stale_time,
            None => true,
        }
    }

    /// Mark every entry under `prefix` stale and signal subscribers.
    ///
    /// Returns the number of entries marked.
    pub fn invalidate_queries(&self, prefix: &QueryKey) -> usize {
        let mut marked = 0;
        if let Ok(mut entries) = self.inner.entries.write() {
            for (key, entry) in entries.iter_mut() {
                if key.starts_with(prefix) {
                    entry.invalidated = true;
                    marked += 1;
                }
            }
        }
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(prefix = %prefix, marked, generation, "queries invalidated");
        marked
    }

    /// Drop every entry under `prefix`. Returns the number removed.
    pub fn remove_queries(&self, prefix: &QueryKey) -> usize {
        let Ok(mut entries) = self.inner.entries.write() else {
            return 0;
        };
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        before - entries.len()
    }

    /// Incremented by every invalidation.
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    /// Serve fresh cached data for `key`, or run `fetcher` and cache its result.
    ///
    /// Fetch errors are returned as-is and leave the cache untouched.
    pub async fn fetch_query<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, QueryError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, QueryError>>,
    {
        if !self.is_stale(&key) {
            if let Some(data) = self.get_query_data(&key) {
                debug!(key = %key, "query cache hit");
                return Ok(data);
            }
        }

        debug!(key = %key, "query cache miss, fetching");
        let data = fetcher().await?;
        self.set_query_data(&key, &data)?;
        Ok(data)
    }

    /// [`fetch_query`](Self::fetch_query) backed by a JSON GET of `url`.
    pub async fn fetch_json<T>(&self, key: QueryKey, url: &str) -> Result<T, QueryError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.fetch_query(key, || http::get_json(url)).await
    }

    pub fn len(&self) -> usize {
        self.inner.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn store(&self, key: &QueryKey, data: serde_json::Value, now: DateTime<Utc>) {
        if let Ok(mut entries) = self.inner.entries.write() {
            let gc_time = self.inner.options.gc_time;
            entries.retain(|_, entry| now - entry.updated_at < gc_time);
            entries.insert(
                key.clone(),
                CacheEntry {
                    data,
                    updated_at: now,
                    invalidated: false,
                },
            );
        }
    }
}
