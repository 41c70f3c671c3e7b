//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. When a
//! migration changes the schema, regenerate with `diesel print-schema`.

diesel::table! {
    /// Invoices billed to customers.
    invoices (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Customer the invoice is billed to.
        customer_id -> Uuid,
        /// Amount in cents.
        amount -> Int4,
        /// `pending` or `paid`.
        status -> Varchar,
        /// Date the invoice was issued.
        date -> Date,
    }
}
