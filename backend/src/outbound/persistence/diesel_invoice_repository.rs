//! PostgreSQL-backed `InvoiceRepository` implementation using Diesel ORM.
//!
//! Database error text is carried into the port error unchanged because the
//! form actions show it to the user.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{InvoiceRepository, InvoiceRepositoryError};
use crate::domain::{InvoiceDraft, InvoiceId};

use super::models::{InvoiceUpdate, NewInvoiceRow};
use super::pool::{DbPool, PoolError};
use super::schema::invoices;

/// Diesel-backed implementation of the `InvoiceRepository` port.
#[derive(Clone)]
pub struct DieselInvoiceRepository {
    pool: DbPool,
}

impl DieselInvoiceRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> InvoiceRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            InvoiceRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> InvoiceRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "invoice connection closed");
            InvoiceRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "invoice query failed");
            InvoiceRepositoryError::query(info.message())
        }
        DieselError::NotFound => InvoiceRepositoryError::query("record not found"),
        other => {
            debug!(error = %other, "invoice query failed");
            InvoiceRepositoryError::query(other.to_string())
        }
    }
}

/// Parse a text id the way PostgreSQL would, with the same error text.
fn parse_uuid(raw: &str) -> Result<Uuid, InvoiceRepositoryError> {
    Uuid::parse_str(raw).map_err(|_| {
        InvoiceRepositoryError::query(format!("invalid input syntax for type uuid: \"{raw}\""))
    })
}

fn ensure_affected(rows: usize, id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
    if rows == 0 {
        Err(InvoiceRepositoryError::not_found(id.as_str()))
    } else {
        Ok(())
    }
}

#[async_trait]
impl InvoiceRepository for DieselInvoiceRepository {
    async fn add_invoice(&self, draft: &InvoiceDraft) -> Result<(), InvoiceRepositoryError> {
        let row = NewInvoiceRow {
            customer_id: parse_uuid(draft.customer_id.as_str())?,
            amount: draft.amount.get(),
            status: draft.status.as_str(),
            date: Utc::now().date_naive(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(invoices::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn update_invoice(
        &self,
        id: &InvoiceId,
        draft: &InvoiceDraft,
    ) -> Result<(), InvoiceRepositoryError> {
        let invoice_id = parse_uuid(id.as_str())?;
        let changes = InvoiceUpdate {
            customer_id: parse_uuid(draft.customer_id.as_str())?,
            amount: draft.amount.get(),
            status: draft.status.as_str(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = diesel::update(invoices::table.filter(invoices::id.eq(invoice_id)))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        ensure_affected(rows, id)
    }

    async fn delete_invoice(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        let invoice_id = parse_uuid(id.as_str())?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = diesel::delete(invoices::table.filter(invoices::id.eq(invoice_id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        ensure_affected(rows, id)
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for error mapping; queries run against PostgreSQL only
    //! in deployment.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err.to_string(), "ConnectionError: timed out");
    }

    #[rstest]
    fn not_found_rows_become_query_errors() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(err.to_string(), "Error: record not found");
    }

    #[rstest]
    fn rollback_errors_keep_their_text() {
        let err = map_diesel_error(diesel::result::Error::RollbackTransaction);
        assert_eq!(
            err,
            InvoiceRepositoryError::query(diesel::result::Error::RollbackTransaction.to_string())
        );
    }

    #[rstest]
    #[case("2f1d7a64-5a0c-4b0e-9a44-0d0f3c1d9b21", true)]
    #[case("abc", false)]
    fn customer_ids_must_be_uuids(#[case] raw: &str, #[case] valid: bool) {
        match parse_uuid(raw) {
            Ok(uuid) => {
                assert!(valid);
                assert_eq!(uuid.to_string(), raw);
            }
            Err(err) => {
                assert!(!valid);
                assert_eq!(
                    err.to_string(),
                    format!("Error: invalid input syntax for type uuid: \"{raw}\"")
                );
            }
        }
    }

    #[rstest]
    fn zero_rows_is_not_found() {
        let id = InvoiceId::new("2f1d7a64-5a0c-4b0e-9a44-0d0f3c1d9b21").expect("id");
        assert_eq!(
            ensure_affected(0, &id),
            Err(InvoiceRepositoryError::not_found(id.as_str()))
        );
        assert_eq!(ensure_affected(1, &id), Ok(()));
    }
}
