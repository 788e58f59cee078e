// src/cache.rs
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::fetch::SheetSource;
use crate::process::{self, Table};

struct Slot {
    table: Arc<Table>,
    loaded_at: Instant,
}

/// Time-bounded memo of the last successful load.
///
/// Every `get` inside one TTL window hands back the same `Arc<Table>`. The
/// slot lock is held across a refresh, so callers racing an expiry wait for
/// the single in-flight fetch and share its result.
///
/// A failed refresh leaves the previous slot untouched; it is still expired,
/// so the next `get` tries again.
pub struct SheetCache<S> {
    source: S,
    ttl: Duration,
    slot: Mutex<Option<Slot>>,
}

impl<S: SheetSource> SheetCache<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current table, fetching first when the cache is empty or expired.
    pub async fn get(&self) -> Result<Arc<Table>> {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            let age = cached.loaded_at.elapsed();
            if age < self.ttl {
                debug!(age = ?age, "sheet cache hit");
                return Ok(Arc::clone(&cached.table));
            }
            debug!(age = ?age, ttl = ?self.ttl, "sheet cache expired");
        }

        match process::load(&self.source).await {
            Ok(table) => {
                let table = Arc::new(table);
                info!(rows = table.len(), ttl = ?self.ttl, "sheet cache refreshed");
                *slot = Some(Slot {
                    table: Arc::clone(&table),
                    loaded_at: Instant::now(),
                });
                Ok(table)
            }
            Err(e) => {
                warn!(error = %e, "sheet refresh failed");
                Err(e)
            }
        }
    }

    /// Drop the cached table; the next `get` fetches.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    /// Age of the cached table, `None` when nothing is cached.
    pub async fn age(&self) -> Option<Duration> {
        self.slot.lock().await.as_ref().map(|s| s.loaded_at.elapsed())
    }
}
