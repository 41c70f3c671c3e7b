//! Results handed back to the submitting form.

use serde::{Deserialize, Serialize};

use super::{FieldErrors, ViewPath};

/// State rendered inline by the form after a submission.
///
/// `errors` is omitted from JSON when absent; `message` is always present and
/// may be `null`.
///
/// # Examples
/// ```
/// use dashboard::domain::FormState;
///
/// let state = FormState::message("Deleted Invoice.");
/// assert_eq!(
///     serde_json::to_string(&state).unwrap(),
///     r#"{"message":"Deleted Invoice."}"#,
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Per-field validation messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    /// Form-level message.
    #[serde(default)]
    pub message: Option<String>,
}

impl FormState {
    /// State carrying only a form-level message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }

    /// State carrying field errors and a summary message.
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }
}

/// Result of a form action that may navigate away.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Stay on the form and render this state.
    Render(FormState),
    /// Leave the form for this path; no state reaches the form.
    Redirect(ViewPath),
}

impl ActionOutcome {
    /// The state to render, if the action stayed on the form.
    pub fn state(&self) -> Option<&FormState> {
        match self {
            Self::Render(state) => Some(state),
            Self::Redirect(_) => None,
        }
    }

    /// The navigation target, if the action left the form.
    pub fn redirect_target(&self) -> Option<&ViewPath> {
        match self {
            Self::Render(_) => None,
            Self::Redirect(path) => Some(path),
        }
    }
}
