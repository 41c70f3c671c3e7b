//! In-process view cache adapter.
//!
//! Rendered views are keyed by path. Revalidating a path bumps its
//! generation so renderers holding an older generation know to recompute.
//! There is no shared backend, so each process tracks its own generations.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ViewPath;
use crate::domain::ports::{ViewCache, ViewCacheError};

/// View cache keeping one generation counter per path.
#[derive(Debug, Default)]
pub struct InMemoryViewCache {
    generations: RwLock<HashMap<String, u64>>,
}

impl InMemoryViewCache {
    /// Create an empty cache; every path starts at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation of `path`.
    ///
    /// Renderers compare this counter with the one they rendered at to tell
    /// whether a cached page is stale.
    pub async fn generation(&self, path: &ViewPath) -> u64 {
        self.generations
            .read()
            .await
            .get(path.as_str())
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ViewCache for InMemoryViewCache {
    async fn revalidate_path(&self, path: &ViewPath) -> Result<(), ViewCacheError> {
        let mut generations = self.generations.write().await;
        let generation = generations.entry(path.as_str().to_owned()).or_default();
        *generation = generation.checked_add(1).ok_or_else(|| {
            ViewCacheError::backend(format!("generation counter exhausted for {path}"))
        })?;
        debug!(path = %path, generation = *generation, "view revalidated");
        Ok(())
    }
}
