//! Driving port for the invoice form actions.
//!
//! HTTP handlers call this port with the raw submission; the implementation
//! owns validation, persistence, and cache invalidation. None of the methods
//! can fail: every failure is folded into the returned form state.

use async_trait::async_trait;

use crate::domain::{ActionOutcome, FormData, FormState, InvoiceId};

/// Driving port for creating, editing, and deleting invoices from forms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceFormActions: Send + Sync {
    /// Validate and insert a new invoice.
    async fn create_invoice(&self, prev_state: FormState, form: FormData) -> ActionOutcome;

    /// Validate and update invoice `id`.
    ///
    /// `id` is bound ahead of the generic `(prev_state, form)` pair that form
    /// submissions supply.
    async fn edit_invoice(
        &self,
        id: InvoiceId,
        prev_state: FormState,
        form: FormData,
    ) -> ActionOutcome;

    /// Delete invoice `id` and report the result.
    async fn delete_invoice(&self, id: InvoiceId) -> FormState;
}
