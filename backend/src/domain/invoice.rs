//! Invoice value types.
//!
//! These types carry already-validated data from the form layer to the
//! persistence port. Construction is the only place invariants are checked;
//! the form validator in [`crate::domain::invoice_form`] maps the errors
//! raised here onto per-field messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a stored invoice as supplied by the route.
///
/// ## Invariants
/// - Non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

/// Identifier of the customer an invoice is billed to.
///
/// ## Invariants
/// - Non-empty once trimmed; stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(String);

/// Errors raised when constructing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdValidationError {
    /// Identifier was empty or only whitespace.
    #[error("identifier must not be empty")]
    Empty,
    /// Identifier carried leading or trailing whitespace.
    #[error("identifier must not contain surrounding whitespace")]
    ContainsWhitespace,
}

impl InvoiceId {
    /// Validate and construct an invoice id.
    ///
    /// # Examples
    /// ```
    /// use dashboard::domain::InvoiceId;
    ///
    /// let id = InvoiceId::new("3958dc9e-712f-4377-85e9-fec4b6a6442a").unwrap();
    /// assert_eq!(id.as_str(), "3958dc9e-712f-4377-85e9-fec4b6a6442a");
    /// assert!(InvoiceId::new(" 1").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, IdValidationError> {
        let raw = id.into();
        if raw.trim().is_empty() {
            return Err(IdValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(IdValidationError::ContainsWhitespace);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl CustomerId {
    /// Trim and construct a customer id.
    pub fn new(id: &str) -> Result<Self, IdValidationError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(IdValidationError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Awaiting payment.
    Pending,
    /// Settled.
    Paid,
}

impl InvoiceStatus {
    /// Parse the exact wire value; anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    /// Wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a submitted amount is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Zero, negative, absent, or rounding to zero cents.
    #[error("amount must be greater than zero")]
    NotPositive,
    /// Not a plain decimal number.
    #[error("amount is not a number")]
    NotANumber,
    /// Larger than the storage column can hold.
    #[error("amount exceeds the storable range")]
    TooLarge,
}

/// Positive invoice amount in integer cents.
///
/// ## Invariants
/// - Strictly positive and within `i32` so it fits the `amount` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AmountInCents(i32);

impl AmountInCents {
    /// Coerce a submitted dollar amount into cents.
    ///
    /// Missing or blank input coerces to zero and is therefore rejected as
    /// not positive. Accepted input is an optional sign, digits, an optional
    /// fractional part, and an optional `e`/`E` exponent as number inputs
    /// submit it; the third fractional digit rounds half away from zero. The arithmetic stays in integers so `12.50` is exactly
    /// `1250` cents.
    ///
    /// # Examples
    /// ```
    /// use dashboard::domain::{AmountError, AmountInCents};
    ///
    /// assert_eq!(AmountInCents::parse(Some("12.50")).unwrap().get(), 1250);
    /// assert_eq!(AmountInCents::parse(Some(" 0.005 ")).unwrap().get(), 1);
    /// assert_eq!(AmountInCents::parse(Some("1e2")).unwrap().get(), 10000);
    /// assert_eq!(AmountInCents::parse(None), Err(AmountError::NotPositive));
    /// assert_eq!(AmountInCents::parse(Some("ten")), Err(AmountError::NotANumber));
    /// ```
    pub fn parse(raw: Option<&str>) -> Result<Self, AmountError> {
        let text = raw.unwrap_or_default().trim();
        if text.is_empty() {
            return Err(AmountError::NotPositive);
        }

        let (negative, unsigned) = split_sign(text);
        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (unsigned, None),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return Err(AmountError::NotANumber);
        }
        let shift = exponent.map_or(Some(0), parse_exponent).ok_or(AmountError::NotANumber)?;
        if negative {
            return Err(AmountError::NotPositive);
        }

        let digits = format!("{whole}{fraction}");
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return Err(AmountError::NotPositive);
        }
        let leading_zeros = whole_len(&digits) - whole_len(significant);
        let point = whole_len(whole) + shift - leading_zeros;
        let (whole, fraction) = place_point(significant, point)?;

        let cents = whole_cents(&whole)?
            .checked_add(fraction_cents(&fraction))
            .ok_or(AmountError::TooLarge)?;
        if cents == 0 {
            return Err(AmountError::NotPositive);
        }
        i32::try_from(cents)
            .map(Self)
            .map_err(|_| AmountError::TooLarge)
    }

    /// Construct from a stored cents value.
    pub fn from_cents(cents: i32) -> Result<Self, AmountError> {
        if cents > 0 {
            Ok(Self(cents))
        } else {
            Err(AmountError::NotPositive)
        }
    }

    /// Amount in cents.
    pub fn get(self) -> i32 {
        self.0
    }
}

// Integer digits beyond this always exceed the `i32` cents range.
const MAX_WHOLE_DIGITS: i64 = 10;
// Digits this far right of the point round to zero cents.
const MIN_POINT: i64 = -2;

fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    }
}

fn is_digits(part: &str) -> bool {
    part.bytes().all(|byte| byte.is_ascii_digit())
}

fn whole_len(digits: &str) -> i64 {
    i64::try_from(digits.len()).unwrap_or(i64::MAX)
}

/// Signed decimal exponent, saturated well past any representable amount.
fn parse_exponent(raw: &str) -> Option<i64> {
    let (negative, digits) = split_sign(raw);
    if digits.is_empty() || !is_digits(digits) {
        return None;
    }
    let magnitude = digits.bytes().fold(0_i64, |acc, byte| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'))
            .min(1_000)
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Split `significant` (no leading zeros) so `point` digits sit left of the
/// decimal point, padding with zeros on either side as needed.
fn place_point(significant: &str, point: i64) -> Result<(String, String), AmountError> {
    if point > MAX_WHOLE_DIGITS {
        return Err(AmountError::TooLarge);
    }
    if point < MIN_POINT {
        return Err(AmountError::NotPositive);
    }
    let len = whole_len(significant);
    if point <= 0 {
        let zeros = "0".repeat(usize::try_from(-point).unwrap_or_default());
        return Ok((String::new(), format!("{zeros}{significant}")));
    }
    if point >= len {
        let zeros = "0".repeat(usize::try_from(point - len).unwrap_or_default());
        return Ok((format!("{significant}{zeros}"), String::new()));
    }
    let split = usize::try_from(point).unwrap_or_default();
    let (whole, fraction) = significant.split_at(split);
    Ok((whole.to_owned(), fraction.to_owned()))
}

fn whole_cents(digits: &str) -> Result<i64, AmountError> {
    digits
        .bytes()
        .try_fold(0_i64, |acc, byte| {
            acc.checked_mul(10)?.checked_add(i64::from(byte - b'0'))
        })
        .and_then(|dollars| dollars.checked_mul(100))
        .ok_or(AmountError::TooLarge)
}

fn fraction_cents(digits: &str) -> i64 {
    let mut values = digits.bytes().map(|byte| i64::from(byte - b'0'));
    let tenths = values.next().unwrap_or(0);
    let hundredths = values.next().unwrap_or(0);
    let round_up = values.next().is_some_and(|thousandths| thousandths >= 5);
    tenths * 10 + hundredths + i64::from(round_up)
}

/// Validated invoice fields ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    /// Customer the invoice is billed to.
    pub customer_id: CustomerId,
    /// Amount in cents.
    pub amount: AmountInCents,
    /// Payment state.
    pub status: InvoiceStatus,
}
