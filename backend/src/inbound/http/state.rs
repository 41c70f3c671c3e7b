//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{InvoiceFormActions, SignInCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Create, edit and delete actions behind the invoice forms.
    pub invoices: Arc<dyn InvoiceFormActions>,
    /// Credential check behind `/login`.
    pub sign_in: Arc<dyn SignInCommand>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use dashboard::domain::ports::{
    ///     FixtureInvoiceRepository, FixtureSignInProvider, FixtureViewCache,
    /// };
    /// use dashboard::domain::{CredentialsSignInService, InvoiceActionsService};
    /// use dashboard::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InvoiceActionsService::new(
    ///         Arc::new(FixtureInvoiceRepository),
    ///         Arc::new(FixtureViewCache),
    ///     )),
    ///     Arc::new(CredentialsSignInService::new(Arc::new(FixtureSignInProvider))),
    /// );
    /// let _invoices = state.invoices.clone();
    /// ```
    pub fn new(invoices: Arc<dyn InvoiceFormActions>, sign_in: Arc<dyn SignInCommand>) -> Self {
        Self { invoices, sign_in }
    }
}
