//! Invoice form schema.
//!
//! Turns raw [`FormData`] into an [`InvoiceDraft`], collecting a message for
//! every offending field rather than stopping at the first failure so the
//! form can highlight all of them at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AmountError, AmountInCents, CustomerId, FormData, InvoiceDraft, InvoiceStatus};

pub(crate) const CUSTOMER_REQUIRED: &str = "Please select a customer.";
pub(crate) const AMOUNT_NOT_POSITIVE: &str = "Please enter an amount greater than $0.";
pub(crate) const AMOUNT_NOT_A_NUMBER: &str = "Please enter a valid amount.";
pub(crate) const AMOUNT_TOO_LARGE: &str = "Amount is too large.";
pub(crate) const STATUS_REQUIRED: &str = "Please select an invoice status.";

/// Fields accepted by the invoice create and edit forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceField {
    /// `customerId` input.
    CustomerId,
    /// `amount` input, in dollars.
    Amount,
    /// `status` radio group.
    Status,
}

impl InvoiceField {
    /// Name of the form input.
    pub fn name(self) -> &'static str {
        match self {
            Self::CustomerId => "customerId",
            Self::Amount => "amount",
            Self::Status => "status",
        }
    }
}

/// Per-field validation messages keyed by the offending field.
///
/// Serialises as a JSON object such as
/// `{"amount": ["Please enter an amount greater than $0."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<InvoiceField, Vec<String>>);

impl FieldErrors {
    /// Record a message against `field`.
    pub fn push(&mut self, field: InvoiceField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: InvoiceField) -> Option<&[String]> {
        self.0.get(&field).map(Vec::as_slice)
    }

    /// Whether `field` has at least one message.
    pub fn contains(&self, field: InvoiceField) -> bool {
        self.0.contains_key(&field)
    }

    /// Fields with messages, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = InvoiceField> + '_ {
        self.0.keys().copied()
    }

    /// Whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn amount_message(error: AmountError) -> &'static str {
    match error {
        AmountError::NotPositive => AMOUNT_NOT_POSITIVE,
        AmountError::NotANumber => AMOUNT_NOT_A_NUMBER,
        AmountError::TooLarge => AMOUNT_TOO_LARGE,
    }
}

/// Validate the invoice form fields.
///
/// # Examples
/// ```
/// use dashboard::domain::{FormData, InvoiceField, validate_invoice_form};
///
/// let form = FormData::from_pairs([("customerId", "abc"), ("amount", "12.50"), ("status", "paid")]);
/// let draft = validate_invoice_form(&form).unwrap();
/// assert_eq!(draft.amount.get(), 1250);
///
/// let errors = validate_invoice_form(&FormData::new()).unwrap_err();
/// assert!(errors.contains(InvoiceField::CustomerId));
/// assert!(errors.contains(InvoiceField::Amount));
/// assert!(errors.contains(InvoiceField::Status));
/// ```
pub fn validate_invoice_form(form: &FormData) -> Result<InvoiceDraft, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = CustomerId::new(form.get(InvoiceField::CustomerId.name()).unwrap_or_default())
        .map_err(|_| errors.push(InvoiceField::CustomerId, CUSTOMER_REQUIRED))
        .ok();

    let amount = AmountInCents::parse(form.get(InvoiceField::Amount.name()))
        .map_err(|err| errors.push(InvoiceField::Amount, amount_message(err)))
        .ok();

    let status = form
        .get(InvoiceField::Status.name())
        .and_then(InvoiceStatus::parse);
    if status.is_none() {
        errors.push(InvoiceField::Status, STATUS_REQUIRED);
    }

    match (customer_id, amount, status) {
        (Some(customer_id), Some(amount), Some(status)) => Ok(InvoiceDraft {
            customer_id,
            amount,
            status,
        }),
        _ => Err(errors),
    }
}
