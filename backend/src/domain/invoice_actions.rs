//! Invoice form actions.
//!
//! This module implements the [`InvoiceFormActions`] driving port. Create and
//! edit share one validate, persist, revalidate, redirect pipeline; delete
//! skips validation and reports back to the form instead of navigating.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    InvoiceFormActions, InvoiceRepository, InvoiceRepositoryError, ViewCache,
};
use crate::domain::{
    ActionOutcome, FormData, FormState, InvoiceDraft, InvoiceId, ViewPath, validate_invoice_form,
};

const DELETED_INVOICE: &str = "Deleted Invoice.";

/// Which repository call a validated form feeds.
#[derive(Debug, Clone, Copy)]
enum InvoiceMutation<'a> {
    Create,
    Update(&'a InvoiceId),
}

impl InvoiceMutation<'_> {
    fn verb(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update(_) => "Update",
        }
    }
}

/// Invoice form service backed by a repository and a view cache.
#[derive(Clone)]
pub struct InvoiceActionsService<R, C> {
    invoices: Arc<R>,
    view_cache: Arc<C>,
}

impl<R, C> InvoiceActionsService<R, C> {
    /// Create a new service with the given collaborators.
    pub fn new(invoices: Arc<R>, view_cache: Arc<C>) -> Self {
        Self {
            invoices,
            view_cache,
        }
    }
}

impl<R, C> InvoiceActionsService<R, C>
where
    R: InvoiceRepository,
    C: ViewCache,
{
    fn database_error(verb: &str, error: &InvoiceRepositoryError) -> FormState {
        FormState::message(format!("Database Error: Failed to {verb} Invoice.{error}"))
    }

    async fn revalidate_invoices(&self) {
        let path = ViewPath::invoices();
        if let Err(error) = self.view_cache.revalidate_path(&path).await {
            warn!(path = %path, %error, "failed to revalidate cached view");
        }
    }

    async fn submit(&self, mutation: InvoiceMutation<'_>, form: &FormData) -> ActionOutcome {
        let verb = mutation.verb();
        let draft = match validate_invoice_form(form) {
            Ok(draft) => draft,
            Err(errors) => {
                return ActionOutcome::Render(FormState::invalid(
                    errors,
                    format!("Missing Fields. Failed to {verb} Invoice."),
                ));
            }
        };

        if let Err(error) = self.persist(mutation, &draft).await {
            warn!(action = verb, %error, "invoice mutation failed");
            return ActionOutcome::Render(Self::database_error(verb, &error));
        }
        info!(
            action = verb,
            customer_id = %draft.customer_id,
            amount_cents = draft.amount.get(),
            status = %draft.status,
            "invoice saved"
        );

        self.revalidate_invoices().await;
        ActionOutcome::Redirect(ViewPath::invoices())
    }

    async fn persist(
        &self,
        mutation: InvoiceMutation<'_>,
        draft: &InvoiceDraft,
    ) -> Result<(), InvoiceRepositoryError> {
        match mutation {
            InvoiceMutation::Create => self.invoices.add_invoice(draft).await,
            InvoiceMutation::Update(id) => self.invoices.update_invoice(id, draft).await,
        }
    }
}

#[async_trait]
impl<R, C> InvoiceFormActions for InvoiceActionsService<R, C>
where
    R: InvoiceRepository,
    C: ViewCache,
{
    async fn create_invoice(&self, _prev_state: FormState, form: FormData) -> ActionOutcome {
        self.submit(InvoiceMutation::Create, &form).await
    }

    async fn edit_invoice(
        &self,
        id: InvoiceId,
        _prev_state: FormState,
        form: FormData,
    ) -> ActionOutcome {
        self.submit(InvoiceMutation::Update(&id), &form).await
    }

    async fn delete_invoice(&self, id: InvoiceId) -> FormState {
        if let Err(error) = self.invoices.delete_invoice(&id).await {
            warn!(invoice_id = %id, %error, "invoice deletion failed");
            return Self::database_error("Delete", &error);
        }
        info!(invoice_id = %id, "invoice deleted");

        self.revalidate_invoices().await;
        FormState::message(DELETED_INVOICE)
    }
}

#[cfg(test)]
#[path = "invoice_actions_tests.rs"]
mod tests;
