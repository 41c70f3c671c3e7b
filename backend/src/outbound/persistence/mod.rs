//! Invoice persistence adapters.
//!
//! [`DieselInvoiceRepository`] stores invoices in PostgreSQL via Diesel with
//! `diesel-async` and `bb8` pooling. [`InMemoryInvoiceRepository`] keeps them
//! in process for local runs and tests.
//!
//! Row structs (`models.rs`) and schema definitions (`schema.rs`) are internal
//! implementation details, never exposed to the domain layer.
//!
//! # Example
//!
//! ```ignore
//! use dashboard::outbound::persistence::{DbPool, DieselInvoiceRepository, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/dashboard");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselInvoiceRepository::new(pool);
//! ```

mod diesel_invoice_repository;
mod in_memory_invoice_repository;
mod models;
mod pool;
mod schema;

pub use diesel_invoice_repository::DieselInvoiceRepository;
pub use in_memory_invoice_repository::{InMemoryInvoiceRepository, StoredInvoice};
pub use pool::{DbPool, PoolConfig, PoolError};
