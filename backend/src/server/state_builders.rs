//! Builders wiring driven adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use dashboard::domain::ports::{
    FixtureSignInProvider, InvoiceFormActions, SignInCommand, UnconfiguredSignInProvider,
};
use dashboard::domain::{CredentialsSignInService, InvoiceActionsService};
use dashboard::inbound::http::state::HttpState;
use dashboard::outbound::cache::InMemoryViewCache;
use dashboard::outbound::persistence::{DieselInvoiceRepository, InMemoryInvoiceRepository};

use super::ServerConfig;

fn build_invoice_actions(
    config: &ServerConfig,
    view_cache: Arc<InMemoryViewCache>,
) -> Arc<dyn InvoiceFormActions> {
    match &config.db_pool {
        Some(pool) => {
            info!("storing invoices in PostgreSQL");
            Arc::new(InvoiceActionsService::new(
                Arc::new(DieselInvoiceRepository::new(pool.clone())),
                view_cache,
            ))
        }
        None => {
            info!("no database configured; storing invoices in memory");
            Arc::new(InvoiceActionsService::new(
                Arc::new(InMemoryInvoiceRepository::new()),
                view_cache,
            ))
        }
    }
}

fn build_sign_in(config: &ServerConfig) -> Arc<dyn SignInCommand> {
    if config.fixture_sign_in {
        warn!("demo sign-in enabled; the built-in account can sign in");
        Arc::new(CredentialsSignInService::new(Arc::new(FixtureSignInProvider)))
    } else {
        warn!("no sign-in provider configured; every login will be refused");
        Arc::new(CredentialsSignInService::new(Arc::new(
            UnconfiguredSignInProvider,
        )))
    }
}

/// Build the shared HTTP state from the server configuration.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let view_cache = Arc::new(InMemoryViewCache::new());
    let invoices = build_invoice_actions(config, view_cache);
    web::Data::new(HttpState::new(invoices, build_sign_in(config)))
}
