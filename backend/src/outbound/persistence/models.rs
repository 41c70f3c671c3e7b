//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::invoices;

/// Insertable struct for creating invoice records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct NewInvoiceRow<'a> {
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: &'a str,
    pub date: NaiveDate,
}

/// Changeset for editing an invoice; the issue date is left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = invoices)]
pub(crate) struct InvoiceUpdate<'a> {
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: &'a str,
}
