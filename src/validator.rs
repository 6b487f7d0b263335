//! Pre-flight validation of payment inputs.
//!
//! Every function here is pure: it reads its arguments (and, for card expiry, the current
//! year) and either returns `Ok(())` or the first [`ValidationError`] it runs into. Checks
//! are ordered and short-circuit; there is no aggregation of multiple failures.
//!
//! # Examples
//!
//! ```
//! use checkout_sdk::enums::Currency;
//! use checkout_sdk::validator::{validate_customer, validate_payment_source, validate_transaction};
//!
//! validate_payment_source(None, Some("tok_12345678-1234-1234-1234-123456789012")).unwrap();
//! validate_transaction(1000, Currency::USD, "Regular").unwrap();
//! validate_customer(Some("test@user.com")).unwrap();
//!
//! let err = validate_transaction(1000, "ZZZ", "Regular").unwrap_err();
//! assert_eq!(err.message(), "Invalid currency.");
//! ```

use crate::enums::{Currency, PaymentType, StringEnum};
use crate::errors::ValidationError;
use crate::types::CardSource;
use crate::utils::{current_year, CARD_ID, CUSTOMER_ID, EMAIL, TOKEN};
use serde_json::{Map, Value};

/// Neither a card nor a token was supplied.
pub const MISSING_PAYMENT_SOURCE: &str =
    "Payment source missing. Please specify a valid card or token.";
/// Card details failed the Luhn, expiry or CVV checks.
pub const INVALID_CARD_DATA: &str = "Invalid card data.";
/// A card id did not have the `card_` GUID shape.
pub const INVALID_CARD_SOURCE: &str = "Invalid card source. Please provide a valid Card Id.";
/// A token did not have the token GUID shape.
pub const INVALID_TOKEN_SOURCE: &str = "Invalid token source.";
/// Amount below zero or not an integer.
pub const INVALID_TRANSACTION_VALUE: &str =
    "Transaction value must be equal or greater than zero";
/// Currency outside [`Currency`].
pub const INVALID_CURRENCY: &str = "Invalid currency.";
/// Payment type outside [`PaymentType`].
pub const INVALID_PAYMENT_TYPE: &str = "Invalid payment type.";
/// Customer is neither a customer id nor an email.
pub const CUSTOMER_REQUIRED: &str = "Email or Customer Id is required when requesting a payment.";

/// The card argument of [`validate_payment_source`].
#[derive(Debug, Clone, Copy)]
pub enum CardInput<'a> {
    /// Raw card details keyed `number`, `expiryMonth`, `expiryYear` and `cvv`
    Details(&'a Map<String, Value>),
    /// A stored card id
    Id(&'a str),
    /// Typed card details
    Source(&'a CardSource),
}

impl CardInput<'_> {
    fn is_present(&self) -> bool {
        match self {
            CardInput::Details(map) => !map.is_empty(),
            CardInput::Id(id) => !id.is_empty(),
            CardInput::Source(_) => true,
        }
    }
}

impl<'a> From<&'a Map<String, Value>> for CardInput<'a> {
    fn from(map: &'a Map<String, Value>) -> Self {
        CardInput::Details(map)
    }
}

impl<'a> From<&'a str> for CardInput<'a> {
    fn from(id: &'a str) -> Self {
        CardInput::Id(id)
    }
}

impl<'a> From<&'a CardSource> for CardInput<'a> {
    fn from(card: &'a CardSource) -> Self {
        CardInput::Source(card)
    }
}

/// An enumeration argument given either as a typed member or as its raw wire string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumInput<'a, E> {
    /// A typed member
    Member(E),
    /// A raw string, not yet checked
    Raw(&'a str),
}

impl<E: StringEnum> EnumInput<'_, E> {
    /// The underlying wire string.
    pub fn as_str(&self) -> &str {
        match self {
            EnumInput::Member(member) => member.value(),
            EnumInput::Raw(raw) => raw,
        }
    }

    /// Returns true if the wire string belongs to the enumeration.
    pub fn is_member(&self) -> bool {
        E::has_value(self.as_str())
    }
}

impl<'a, E: StringEnum> From<&'a str> for EnumInput<'a, E> {
    fn from(raw: &'a str) -> Self {
        EnumInput::Raw(raw)
    }
}

impl From<Currency> for EnumInput<'_, Currency> {
    fn from(member: Currency) -> Self {
        EnumInput::Member(member)
    }
}

impl From<PaymentType> for EnumInput<'_, PaymentType> {
    fn from(member: PaymentType) -> Self {
        EnumInput::Member(member)
    }
}

fn fail(message: &str) -> Result<(), ValidationError> {
    Err(ValidationError::new(message))
}

/// Validates the card and token payment sources.
///
/// At least one of `card` or `token` must be present. Card details must pass the Luhn
/// check, have an expiry month in 1..=12, an expiry year no earlier than the current year
/// and a numeric CVV (an absent CVV counts as `0`). Card ids and tokens must match their
/// identifier patterns. An empty token is treated as absent.
pub fn validate_payment_source(
    card: Option<CardInput<'_>>,
    token: Option<&str>,
) -> Result<(), ValidationError> {
    let token = token.filter(|t| !t.is_empty());
    if !card.is_some_and(|c| c.is_present()) && token.is_none() {
        return fail(MISSING_PAYMENT_SOURCE);
    }

    match card {
        Some(CardInput::Details(map)) => {
            let this_year = current_year();
            let number = map.get("number").and_then(number_digits);
            let cvv = map.get("cvv").cloned().unwrap_or(Value::from(0));
            let valid = validate_luhn(number.as_deref())
                && is_number(map.get("expiryMonth").unwrap_or(&Value::Null), Some(1), Some(12))
                && is_number(
                    map.get("expiryYear").unwrap_or(&Value::Null),
                    Some(i64::from(this_year)),
                    None,
                )
                && is_number(&cvv, None, None);
            if !valid {
                return fail(INVALID_CARD_DATA);
            }
        }
        Some(CardInput::Source(source)) => {
            let this_year = current_year();
            let cvv_is_numeric = source
                .cvv
                .as_deref()
                .map_or(true, |cvv| is_number(&Value::from(cvv), None, None));
            let valid = validate_luhn(Some(&source.number))
                && (1..=12).contains(&source.expiry_month)
                && source.expiry_year >= this_year
                && cvv_is_numeric;
            if !valid {
                return fail(INVALID_CARD_DATA);
            }
        }
        Some(CardInput::Id(id)) => {
            if !CARD_ID.is_match(id) {
                return fail(INVALID_CARD_SOURCE);
            }
        }
        None => {}
    }

    if let Some(token) = token {
        if !TOKEN.is_match(token) {
            return fail(INVALID_TOKEN_SOURCE);
        }
    }

    Ok(())
}

/// Validates the amount, currency and payment type of a transaction.
///
/// `value` is an amount in minor units and must coerce to an integer `>= 0`. `currency`
/// and `payment_type` may be typed members or raw strings.
pub fn validate_transaction<'a>(
    value: impl Into<Value>,
    currency: impl Into<EnumInput<'a, Currency>>,
    payment_type: impl Into<EnumInput<'a, PaymentType>>,
) -> Result<(), ValidationError> {
    if !is_number(&value.into(), Some(0), None) {
        return fail(INVALID_TRANSACTION_VALUE);
    }
    if !currency.into().is_member() {
        return fail(INVALID_CURRENCY);
    }
    if !payment_type.into().is_member() {
        return fail(INVALID_PAYMENT_TYPE);
    }
    Ok(())
}

/// Validates the customer identifier of a payment.
///
/// The customer must be non-empty and either a customer id (`cust_<guid>`) or an email.
/// Empty and absent values are rejected with the same error.
pub fn validate_customer(customer: Option<&str>) -> Result<(), ValidationError> {
    match customer {
        Some(c) if !c.is_empty() && (CUSTOMER_ID.is_match(c) || EMAIL.is_match(c)) => Ok(()),
        _ => fail(CUSTOMER_REQUIRED),
    }
}

/// Checks that `value` coerces to an integer within the optional inclusive bounds.
///
/// Integers, integral strings (surrounding whitespace allowed), booleans and floats
/// (truncated) coerce; anything else is simply not a number.
///
/// # Examples
///
/// ```
/// use checkout_sdk::validator::is_number;
/// use serde_json::json;
///
/// assert!(is_number(&json!(12), Some(1), Some(12)));
/// assert!(is_number(&json!(" 7 "), None, None));
/// assert!(!is_number(&json!("12a"), None, None));
/// assert!(!is_number(&json!(null), None, None));
/// ```
pub fn is_number(value: &Value, min: Option<i64>, max: Option<i64>) -> bool {
    match coerce_integer(value) {
        Some(n) => {
            min.map_or(true, |min| n >= i128::from(min))
                && max.map_or(true, |max| n <= i128::from(max))
        }
        None => false,
    }
}

fn coerce_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i128)),
        Value::String(s) => s.trim().parse::<i128>().ok(),
        Value::Bool(b) => Some(i128::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// Card numbers may arrive as JSON strings or integers.
fn number_digits(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

/// Luhn (mod 10) checksum of a card number.
///
/// Returns false for an absent number, an empty one, or one containing anything but
/// ASCII digits.
///
/// # Examples
///
/// ```
/// use checkout_sdk::validator::validate_luhn;
///
/// assert!(validate_luhn(Some("4242424242424242")));
/// assert!(!validate_luhn(Some("4242424242424241")));
/// assert!(!validate_luhn(None));
/// ```
pub fn validate_luhn(card_number: Option<&str>) -> bool {
    let Some(number) = card_number else {
        return false;
    };
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let checksum: u32 = number
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, digit)| {
            if i % 2 == 0 {
                digit
            } else {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            }
        })
        .sum();

    checksum % 10 == 0
}
