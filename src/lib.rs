//! # checkout-sdk
//!
//! A Rust client for the Checkout.com payments API.
//!
//! Every request is checked on the client before it is sent. Card numbers are run
//! through the Luhn checksum, expiry dates and CVVs are sanity checked, currencies and
//! payment types must belong to their enumerations, and card ids, tokens and customer
//! ids must have the gateway's identifier shape. A failed check comes back immediately as
//! a [`ValidationError`] with the code `"validation"`, without a network round-trip.
//!
//! ## Features
//!
//! - **Validation**: pure, stateless pre-flight checks in [`validator`]
//! - **Models**: typed requests and responses, including alternative payment methods
//! - **OAuth scopes**: every scope the authorization server knows, in [`oauth_scopes`]
//! - **Client**: a `reqwest` based client for the `/payments` endpoints
//!
//! ## Quick Start
//!
//! ### Validation
//!
//! ```rust
//! use checkout_sdk::validator::{validate_customer, validate_luhn, validate_transaction};
//!
//! assert!(validate_luhn(Some("4242424242424242")));
//! assert!(validate_transaction(1000, "USD", "Regular").is_ok());
//! assert!(validate_customer(Some("not-an-id-or-email")).is_err());
//! ```
//!
//! ### Requesting a payment
//!
//! ```rust,no_run
//! use checkout_sdk::client::PaymentsClient;
//! use checkout_sdk::config::Config;
//! use checkout_sdk::enums::Currency;
//! use checkout_sdk::types::{CardSource, CustomerRequest, PaymentRequest, PaymentRequestSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PaymentsClient::from_config(Config::from_env()?)?;
//!
//! let card = CardSource::new("4242424242424242", 9, 2030).with_cvv("100");
//! let request = PaymentRequest::new(PaymentRequestSource::Card(card), 1000, Currency::USD)
//!     .with_customer(CustomerRequest {
//!         email: Some("test@user.com".to_string()),
//!         ..Default::default()
//!     });
//!
//! let payment = client.request(&request).await?;
//! println!("{} {}", payment.id, payment.status);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod enums;
pub mod errors;
pub mod oauth_scopes;
pub mod types;
pub mod utils;
pub mod validator;

// Re-export commonly used items
pub use client::{HttpClient, PaymentsClient, Transport};
pub use config::{Config, Environment};
pub use enums::{Currency, PaymentSourceType, PaymentType, StringEnum};
pub use errors::{CheckoutError, Result, ValidationError, VALIDATION_ERROR_CODE};
pub use oauth_scopes::OAuthScope;
pub use types::{CardSource, PaymentRequest, PaymentRequestSource, PaymentResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_code_constant() {
        assert_eq!(VALIDATION_ERROR_CODE, "validation");
    }

    #[test]
    fn test_module_accessibility() {
        // Ensure all modules are accessible
        let _ = config::Config::new("sk_test");
        let _ = client::HttpClient::new(Config::new("sk_test")).unwrap();
        let _ = oauth_scopes::join_scopes(&[OAuthScope::Gateway]);
        assert!(validator::validate_luhn(Some("4242424242424242")));
        assert!(utils::is_id("12345678-1234-1234-1234-123456789012", None));
    }
}
