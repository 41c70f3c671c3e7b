//! Driving port for the sign-in form action.

use async_trait::async_trait;

use crate::domain::{FormData, SignInOutcome};

use super::SignInError;

/// Driving port consumed by the login handler.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignInCommand: Send + Sync {
    /// Sign in with the submitted credentials.
    ///
    /// Rejections are returned as [`SignInOutcome::Rejected`] with a form
    /// message.
    ///
    /// # Errors
    ///
    /// Returns the provider's error unchanged when it is not an
    /// authentication error.
    async fn authenticate(
        &self,
        prev_state: Option<String>,
        form: FormData,
    ) -> Result<SignInOutcome, SignInError>;
}
