//! Port for asking a driven dependency whether it can take traffic.
//!
//! Readiness probes consult these before reporting the service ready, so a
//! configured database that cannot hand out connections keeps the instance
//! out of rotation.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Reasons a dependency is not ready.
    pub enum ReadinessError {
        /// The dependency could not be reached.
        Unavailable { message: String } => "dependency unavailable: {message}",
    }
}

/// Check that a dependency can serve requests right now.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    /// Short dependency name used in logs.
    fn name(&self) -> &'static str;

    /// Succeed when the dependency is usable.
    async fn check(&self) -> Result<(), ReadinessError>;
}
