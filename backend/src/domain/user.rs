//! Signed-in user identity.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// Identifier was not a canonical UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
}

/// Stable user identifier.
///
/// ## Invariants
/// - Always a valid UUID; the textual form is kept as supplied so session
///   cookies round-trip byte for byte.
///
/// # Examples
/// ```
/// use dashboard::domain::UserId;
///
/// let id = UserId::new("410544b2-4001-4271-9855-fec4b6a6442a").unwrap();
/// assert_eq!(id.as_ref(), "410544b2-4001-4271-9855-fec4b6a6442a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        let parsed = Uuid::parse_str(raw).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, raw.to_owned()))
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", UserValidationError::EmptyId)]
    #[case("not-a-uuid", UserValidationError::InvalidId)]
    #[case(" 410544b2-4001-4271-9855-fec4b6a6442a", UserValidationError::InvalidId)]
    fn rejects_invalid_ids(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(UserId::new(raw), Err(expected));
    }

    #[rstest]
    fn random_ids_round_trip() {
        let id = UserId::random();
        assert_eq!(UserId::new(id.as_ref()), Ok(id));
    }
}
