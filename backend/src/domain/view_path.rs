//! Application route used as a cache key and redirect target.
use thiserror::Error;

const INVOICES: &str = "/dashboard/invoices";
const DASHBOARD: &str = "/dashboard";
const LOGIN: &str = "/login";

/// Absolute application path such as `/dashboard/invoices`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewPath(String);

impl ViewPath {
    /// Construct a path after checking it is absolute and free of whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ViewPathValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ViewPathValidationError::Empty);
        }
        if !raw.starts_with('/') {
            return Err(ViewPathValidationError::NotAbsolute);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(ViewPathValidationError::ContainsWhitespace);
        }
        Ok(Self(raw))
    }

    /// The invoices listing.
    pub fn invoices() -> Self {
        Self(INVOICES.to_owned())
    }

    /// The dashboard landing page.
    pub fn dashboard() -> Self {
        Self(DASHBOARD.to_owned())
    }

    /// The sign-in page.
    pub fn login() -> Self {
        Self(LOGIN.to_owned())
    }

    /// Borrow the path.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ViewPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ViewPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Validation errors returned when constructing [`ViewPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewPathValidationError {
    /// Path is empty after trimming whitespace.
    #[error("view path must not be empty")]
    Empty,
    /// Path does not start with `/`.
    #[error("view path must be absolute")]
    NotAbsolute,
    /// Path contains whitespace.
    #[error("view path must not contain whitespace")]
    ContainsWhitespace,
}

#[cfg(test)]
mod tests {
    use super::{ViewPath, ViewPathValidationError};
    use rstest::rstest;

    #[rstest]
    #[case("", ViewPathValidationError::Empty)]
    #[case("   ", ViewPathValidationError::Empty)]
    #[case("dashboard", ViewPathValidationError::NotAbsolute)]
    #[case("/dashboard /invoices", ViewPathValidationError::ContainsWhitespace)]
    #[case("/dashboard ", ViewPathValidationError::ContainsWhitespace)]
    fn rejects_malformed_paths(#[case] value: &str, #[case] expected: ViewPathValidationError) {
        assert_eq!(ViewPath::new(value), Err(expected));
    }

    #[rstest]
    fn named_paths_are_valid() {
        for path in [ViewPath::invoices(), ViewPath::dashboard(), ViewPath::login()] {
            assert_eq!(ViewPath::new(path.as_str()), Ok(path));
        }
        assert_eq!(ViewPath::invoices().to_string(), "/dashboard/invoices");
    }
}
