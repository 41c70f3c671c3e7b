//! Authentication primitives: credentials, provider error kinds, and the
//! outcome of a sign-in attempt.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a provider compares them.

use std::fmt;

use zeroize::Zeroizing;

use super::{FormData, UserId};

/// Provider identifier for email and password sign-in.
pub const CREDENTIALS_PROVIDER: &str = "credentials";

/// Message shown when the provider rejects the submitted credentials.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";

/// Message shown for every other authentication failure.
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong.";

/// Shortest password the login form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing, blank, or lacked an `@`.
    #[error("email must be a valid address")]
    InvalidEmail,
    /// Password was shorter than the minimum length.
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed, lowercased, and contains an `@`.
/// - `password` keeps caller-provided whitespace and is zeroed on drop.
///
/// # Examples
/// ```
/// use dashboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" User@Example.com ", "123456").unwrap();
/// assert_eq!(creds.email(), "user@example.com");
/// assert_eq!(creds.password(), "123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim().to_lowercase();
        if normalized.is_empty() || !normalized.contains('@') {
            return Err(LoginValidationError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(LoginValidationError::PasswordTooShort);
        }
        Ok(Self {
            email: normalized,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Read the `email` and `password` fields of a sign-in form.
    pub fn from_form(form: &FormData) -> Result<Self, LoginValidationError> {
        Self::try_from_parts(
            form.get("email").unwrap_or_default(),
            form.get("password").unwrap_or_default(),
        )
    }

    /// Normalised email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Discriminator carried by typed authentication errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    /// The provider rejected the credentials.
    CredentialsSignin,
    /// A sign-in callback refused access.
    AccessDenied,
    /// The provider or its callback raised while handling the request.
    CallbackRouteError,
    /// The provider is misconfigured or unknown.
    Configuration,
    /// Any other discriminator, kept verbatim.
    Other(String),
}

impl AuthErrorKind {
    /// Parse a discriminator string.
    pub fn from_type(value: &str) -> Self {
        match value {
            "CredentialsSignin" => Self::CredentialsSignin,
            "AccessDenied" => Self::AccessDenied,
            "CallbackRouteError" => Self::CallbackRouteError,
            "Configuration" => Self::Configuration,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Discriminator string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CredentialsSignin => "CredentialsSignin",
            Self::AccessDenied => "AccessDenied",
            Self::CallbackRouteError => "CallbackRouteError",
            Self::Configuration => "Configuration",
            Self::Other(value) => value.as_str(),
        }
    }

    /// User-facing message for this kind.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::CredentialsSignin => INVALID_CREDENTIALS,
            _ => SOMETHING_WENT_WRONG,
        }
    }
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AuthErrorKind {
    fn from(value: &str) -> Self {
        Self::from_type(value)
    }
}

/// Outcome of an authentication attempt that did not fail unexpectedly.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The provider accepted the credentials.
    SignedIn(UserId),
    /// The provider rejected the attempt; render this message.
    Rejected(&'static str),
}

impl SignInOutcome {
    /// Message for the form: `None` on success.
    ///
    /// # Examples
    /// ```
    /// use dashboard::domain::{SignInOutcome, UserId};
    ///
    /// assert_eq!(SignInOutcome::SignedIn(UserId::random()).error_message(), None);
    /// assert_eq!(
    ///     SignInOutcome::Rejected("Invalid credentials.").error_message(),
    ///     Some("Invalid credentials."),
    /// );
    /// ```
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::SignedIn(_) => None,
            Self::Rejected(message) => Some(*message),
        }
    }
}
