//! Credential sign-in service.
//!
//! Wraps a [`SignInProvider`] and turns its typed authentication errors into
//! the short messages the login form renders. Anything else is handed back
//! to the caller as-is.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{SignInCommand, SignInError, SignInProvider};
use crate::domain::{CREDENTIALS_PROVIDER, FormData, SignInOutcome};

/// Sign-in service implementing the [`SignInCommand`] driving port.
#[derive(Clone)]
pub struct CredentialsSignInService<P> {
    provider: Arc<P>,
}

impl<P> CredentialsSignInService<P> {
    /// Create a new service delegating to `provider`.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> SignInCommand for CredentialsSignInService<P>
where
    P: SignInProvider,
{
    async fn authenticate(
        &self,
        _prev_state: Option<String>,
        form: FormData,
    ) -> Result<SignInOutcome, SignInError> {
        match self.provider.sign_in(CREDENTIALS_PROVIDER, &form).await {
            Ok(user_id) => Ok(SignInOutcome::SignedIn(user_id)),
            Err(SignInError::Auth { kind }) => Ok(SignInOutcome::Rejected(kind.user_message())),
            Err(error) => Err(error),
        }
    }
}
