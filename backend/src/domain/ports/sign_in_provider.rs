//! Driven port for third-party credential sign-in.
//!
//! The provider owns credential storage and verification. Its failures come
//! in two flavours: typed authentication errors with a kind discriminator,
//! which the sign-in command turns into form messages, and everything else,
//! which the command hands back to its caller untouched.

use async_trait::async_trait;

use crate::domain::{
    AuthErrorKind, CREDENTIALS_PROVIDER, FormData, LoginCredentials, UserId,
};

use super::define_port_error;

define_port_error! {
    /// Failures raised by sign-in providers.
    pub enum SignInError {
        /// Typed authentication error.
        Auth { kind: AuthErrorKind } => "authentication error: {kind}",
        /// Anything that is not an authentication error.
        Unexpected { message: String } => "sign-in failed unexpectedly: {message}",
    }
}

/// Port for signing a user in with submitted form data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignInProvider: Send + Sync {
    /// Authenticate with `provider` using the raw form fields.
    async fn sign_in(&self, provider: &str, form: &FormData) -> Result<UserId, SignInError>;
}

const FIXTURE_EMAIL: &str = "user@nextmail.com";
const FIXTURE_PASSWORD: &str = "123456";
const FIXTURE_USER_ID: &str = "410544b2-4001-4271-9855-fec4b6a6442a";

/// Temporary in-memory provider used until a real identity backend is wired.
///
/// `user@nextmail.com` / `123456` signs in as a fixed user id; every other
/// well-formed or malformed submission is a `CredentialsSignin` error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSignInProvider;

#[async_trait]
impl SignInProvider for FixtureSignInProvider {
    async fn sign_in(&self, provider: &str, form: &FormData) -> Result<UserId, SignInError> {
        if provider != CREDENTIALS_PROVIDER {
            return Err(SignInError::auth(AuthErrorKind::Configuration));
        }
        let credentials = LoginCredentials::from_form(form)
            .map_err(|_| SignInError::auth(AuthErrorKind::CredentialsSignin))?;
        if credentials.email() != FIXTURE_EMAIL || credentials.password() != FIXTURE_PASSWORD {
            return Err(SignInError::auth(AuthErrorKind::CredentialsSignin));
        }
        UserId::new(FIXTURE_USER_ID)
            .map_err(|err| SignInError::unexpected(format!("invalid fixture user id: {err}")))
    }
}

/// Provider used when no identity backend is configured.
///
/// Every attempt fails with a `Configuration` error, which the sign-in form
/// shows as "Something went wrong.".
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredSignInProvider;

#[async_trait]
impl SignInProvider for UnconfiguredSignInProvider {
    async fn sign_in(&self, _provider: &str, _form: &FormData) -> Result<UserId, SignInError> {
        Err(SignInError::auth(AuthErrorKind::Configuration))
    }
}
