//! In-process `InvoiceRepository` used when no database is configured.
//!
//! Ids are fresh UUIDs so records look the same as those the Diesel adapter
//! would return. Nothing survives a restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{InvoiceRepository, InvoiceRepositoryError};
use crate::domain::{AmountInCents, CustomerId, InvoiceDraft, InvoiceId, InvoiceStatus};

/// Invoice as held by [`InMemoryInvoiceRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredInvoice {
    /// Identifier assigned on insert.
    pub id: InvoiceId,
    /// Customer the invoice is billed to.
    pub customer_id: CustomerId,
    /// Amount in cents.
    pub amount: AmountInCents,
    pub status: InvoiceStatus,
    /// Creation date; edits keep it unchanged.
    pub date: NaiveDate,
}

/// In-memory invoice store keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryInvoiceRepository {
    invoices: RwLock<BTreeMap<String, StoredInvoice>>,
}

impl InMemoryInvoiceRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored invoice.
    pub async fn get(&self, id: &InvoiceId) -> Option<StoredInvoice> {
        self.invoices.read().await.get(id.as_str()).cloned()
    }

    /// All stored invoices, ordered by id.
    pub async fn list(&self) -> Vec<StoredInvoice> {
        self.invoices.read().await.values().cloned().collect()
    }
}

fn new_invoice_id() -> Result<InvoiceId, InvoiceRepositoryError> {
    InvoiceId::new(Uuid::new_v4().to_string())
        .map_err(|err| InvoiceRepositoryError::query(format!("generated invalid id: {err}")))
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn add_invoice(&self, draft: &InvoiceDraft) -> Result<(), InvoiceRepositoryError> {
        let id = new_invoice_id()?;
        let stored = StoredInvoice {
            id: id.clone(),
            customer_id: draft.customer_id.clone(),
            amount: draft.amount,
            status: draft.status,
            date: Utc::now().date_naive(),
        };
        self.invoices
            .write()
            .await
            .insert(id.as_str().to_owned(), stored);
        Ok(())
    }

    async fn update_invoice(
        &self,
        id: &InvoiceId,
        draft: &InvoiceDraft,
    ) -> Result<(), InvoiceRepositoryError> {
        let mut invoices = self.invoices.write().await;
        let stored = invoices
            .get_mut(id.as_str())
            .ok_or_else(|| InvoiceRepositoryError::not_found(id.as_str()))?;
        stored.customer_id = draft.customer_id.clone();
        stored.amount = draft.amount;
        stored.status = draft.status;
        Ok(())
    }

    async fn delete_invoice(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        self.invoices
            .write()
            .await
            .remove(id.as_str())
            .map(drop)
            .ok_or_else(|| InvoiceRepositoryError::not_found(id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn draft() -> InvoiceDraft {
        InvoiceDraft {
            customer_id: CustomerId::new("abc").expect("customer"),
            amount: AmountInCents::from_cents(1250).expect("amount"),
            status: InvoiceStatus::Pending,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn add_then_update_then_delete(draft: InvoiceDraft) {
        let repo = InMemoryInvoiceRepository::new();
        repo.add_invoice(&draft).await.expect("add");
        let stored = repo.list().await.pop().expect("one invoice");
        assert_eq!(stored.amount.get(), 1250);
        assert_eq!(stored.date, Utc::now().date_naive());

        let paid = InvoiceDraft {
            status: InvoiceStatus::Paid,
            ..draft
        };
        repo.update_invoice(&stored.id, &paid).await.expect("update");
        let updated = repo.get(&stored.id).await.expect("still stored");
        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert_eq!(updated.date, stored.date);

        repo.delete_invoice(&stored.id).await.expect("delete");
        assert!(repo.list().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_ids_are_not_found(draft: InvoiceDraft) {
        let repo = InMemoryInvoiceRepository::new();
        let id = InvoiceId::new("missing").expect("id");

        assert_eq!(
            repo.update_invoice(&id, &draft).await,
            Err(InvoiceRepositoryError::not_found("missing"))
        );
        assert_eq!(
            repo.delete_invoice(&id).await,
            Err(InvoiceRepositoryError::not_found("missing"))
        );
    }
}
