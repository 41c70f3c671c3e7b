//! Orchestration probes.
//!
//! Liveness answers `200` whenever the process can serve HTTP. Readiness
//! waits until the server has bound its socket and then asks every
//! registered [`ReadinessProbe`], so an instance whose database cannot hand
//! out connections drops out of rotation instead of failing form posts.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use tracing::warn;

use crate::domain::ports::ReadinessProbe;

/// Readiness flag plus the dependencies it depends on.
#[derive(Default)]
pub struct HealthState {
    started: AtomicBool,
    probes: Vec<Arc<dyn ReadinessProbe>>,
}

impl HealthState {
    /// Not ready until [`HealthState::mark_ready`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `probe` to pass before reporting ready.
    #[must_use]
    pub fn with_probe(mut self, probe: Arc<dyn ReadinessProbe>) -> Self {
        self.probes.push(probe);
        self
    }

    /// Record that the server is accepting connections.
    pub fn mark_ready(&self) {
        self.started.store(true, Ordering::Release);
    }

    /// Whether the server has started and every dependency answers.
    pub async fn is_ready(&self) -> bool {
        if !self.started.load(Ordering::Acquire) {
            return false;
        }
        for probe in &self.probes {
            if let Err(error) = probe.check().await {
                warn!(dependency = probe.name(), %error, "readiness check failed");
                return false;
            }
        }
        true
    }
}

fn probe_response(ok: bool) -> HttpResponse {
    let mut response = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe.
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready().await)
}

/// Liveness probe.
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    probe_response(true)
}
