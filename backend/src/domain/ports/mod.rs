//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod invoice_form_actions;
mod invoice_repository;
mod readiness_probe;
mod sign_in_command;
mod sign_in_provider;
mod view_cache;

pub use invoice_form_actions::InvoiceFormActions;
#[cfg(test)]
pub use invoice_form_actions::MockInvoiceFormActions;
#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
pub use invoice_repository::{
    FixtureInvoiceRepository, InvoiceRepository, InvoiceRepositoryError,
};
#[cfg(test)]
pub use readiness_probe::MockReadinessProbe;
pub use readiness_probe::{ReadinessError, ReadinessProbe};
#[cfg(test)]
pub use sign_in_command::MockSignInCommand;
pub use sign_in_command::SignInCommand;
#[cfg(test)]
pub use sign_in_provider::MockSignInProvider;
pub use sign_in_provider::{
    FixtureSignInProvider, SignInError, SignInProvider, UnconfiguredSignInProvider,
};
#[cfg(test)]
pub use view_cache::MockViewCache;
pub use view_cache::{FixtureViewCache, ViewCache, ViewCacheError};
