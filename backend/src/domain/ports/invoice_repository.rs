//! Port for invoice persistence.
//!
//! Form actions only mutate invoices; reads for listings live elsewhere. Error
//! messages follow the `Name: message` shape because actions append them
//! verbatim to the user-facing failure message.

use async_trait::async_trait;

use crate::domain::{InvoiceDraft, InvoiceId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by invoice repository adapters.
    pub enum InvoiceRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "ConnectionError: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "Error: {message}",
        /// No invoice matched the supplied id.
        NotFound { id: String } => "Error: invoice {id} not found",
    }
}

/// Port for inserting, updating, and deleting invoices.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Insert a new invoice dated today.
    async fn add_invoice(&self, draft: &InvoiceDraft) -> Result<(), InvoiceRepositoryError>;

    /// Replace the customer, amount, and status of an existing invoice.
    async fn update_invoice(
        &self,
        id: &InvoiceId,
        draft: &InvoiceDraft,
    ) -> Result<(), InvoiceRepositoryError>;

    /// Remove an invoice.
    async fn delete_invoice(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError>;
}

/// Fixture implementation that accepts every mutation and stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInvoiceRepository;

#[async_trait]
impl InvoiceRepository for FixtureInvoiceRepository {
    async fn add_invoice(&self, _draft: &InvoiceDraft) -> Result<(), InvoiceRepositoryError> {
        Ok(())
    }

    async fn update_invoice(
        &self,
        _id: &InvoiceId,
        _draft: &InvoiceDraft,
    ) -> Result<(), InvoiceRepositoryError> {
        Ok(())
    }

    async fn delete_invoice(&self, _id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(InvoiceRepositoryError::query("x"), "Error: x")]
    #[case(
        InvoiceRepositoryError::connection("pool exhausted"),
        "ConnectionError: pool exhausted"
    )]
    #[case(InvoiceRepositoryError::not_found("42"), "Error: invoice 42 not found")]
    fn errors_render_name_and_message(
        #[case] error: InvoiceRepositoryError,
        #[case] expected: &str,
    ) {
        assert_eq!(error.to_string(), expected);
    }
}
