//! Port for invalidating cached renders of application views.
use async_trait::async_trait;

use crate::domain::ViewPath;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by the caching adapter.
    pub enum ViewCacheError {
        /// Cache backend is unavailable or timing out.
        Backend { message: String } => "view cache backend failure: {message}",
    }
}

/// Marks cached renders stale so the next request recomputes them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewCache: Send + Sync {
    /// Mark the cached render of `path` as stale.
    async fn revalidate_path(&self, path: &ViewPath) -> Result<(), ViewCacheError>;
}

/// Fixture cache with nothing to invalidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureViewCache;

#[async_trait]
impl ViewCache for FixtureViewCache {
    async fn revalidate_path(&self, _path: &ViewPath) -> Result<(), ViewCacheError> {
        Ok(())
    }
}
