//! Identifier pattern matchers and small helpers used by the validator.
//!
//! Gateway identifiers are GUID shaped (`8-4-4-4-12` word characters) and usually carry a
//! resource prefix such as `cust_` or `card_`. The fixed patterns are compiled once.

use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

const GUID_BODY: &str = r"(\w{8})-(\w{4})-(\w{4})-(\w{4})-(\w{12})$";

/// Matches customer ids, e.g. `cust_9bde7b8b-1f94-4f4f-a35b-c5eba4e8c2d4`.
pub static CUSTOMER_ID: LazyLock<Regex> = LazyLock::new(|| compile(Some("cust")));

/// Matches stored card ids, e.g. `card_9bde7b8b-1f94-4f4f-a35b-c5eba4e8c2d4`.
pub static CARD_ID: LazyLock<Regex> = LazyLock::new(|| compile(Some("card")));

/// Matches card tokens, with or without a `tok_` or `card_tok_` prefix.
pub static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)^((card_)?tok_)?{}", GUID_BODY)).expect("token pattern is valid")
});

/// Minimal `<local>@<domain>` shape.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^.+@.+$").expect("email pattern is valid")
});

// Fixed prefixes are known-good patterns.
fn compile(prefix: Option<&str>) -> Regex {
    guid_regex(prefix).expect("identifier pattern is valid")
}

/// Builds a case-insensitive identifier pattern.
///
/// `prefix` is a regex fragment placed before the `_` separator. Without a prefix any
/// word of three or more characters followed by `_` is accepted, or no prefix at all.
///
/// # Examples
///
/// ```
/// use checkout_sdk::utils::guid_regex;
///
/// let re = guid_regex(Some("pay")).unwrap();
/// assert!(re.is_match("pay_12345678-1234-1234-1234-123456789012"));
/// assert!(!re.is_match("act_12345678-1234-1234-1234-123456789012"));
/// ```
pub fn guid_regex(prefix: Option<&str>) -> Result<Regex, regex::Error> {
    let prefix = match prefix {
        Some(prefix) => format!("{}_", prefix),
        None => r"(\w{3,}_)?".to_string(),
    };
    Regex::new(&format!("(?i)^{}{}", prefix, GUID_BODY))
}

/// Checks whether `value` is a GUID-shaped identifier with the given literal prefix.
///
/// # Examples
///
/// ```
/// use checkout_sdk::utils::is_id;
///
/// assert!(is_id("cust_12345678-1234-1234-1234-123456789012", Some("cust")));
/// assert!(is_id("12345678-1234-1234-1234-123456789012", None));
/// assert!(!is_id("cust_1234", Some("cust")));
/// ```
pub fn is_id(value: &str, prefix: Option<&str>) -> bool {
    let escaped = prefix.map(regex::escape);
    guid_regex(escaped.as_deref())
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
