//! Integration tests for the checkout-sdk library.
//!
//! These exercise the public validation API and the HTTP client against a local mock
//! of the gateway.

use checkout_sdk::{
    client::{HttpClient, PaymentsClient, Transport},
    config::Config,
    enums::{Currency, PaymentType},
    errors::CheckoutError,
    types::{
        CaptureRequest, CardSource, CustomerRequest, PaymentRequest, PaymentRequestSource,
    },
    utils::current_year,
    validator::{
        validate_customer, validate_luhn, validate_payment_source, validate_transaction,
        CardInput,
    },
};
use httpmock::prelude::*;
use reqwest::Method;
use serde_json::{json, Map, Value};

const TOKEN: &str = "tok_12345678-1234-1234-1234-123456789012";

fn card_details(month: u32) -> Map<String, Value> {
    json!({
        "number": "4242424242424242",
        "expiryMonth": month,
        "expiryYear": current_year() + 5,
        "cvv": "100"
    })
    .as_object()
    .cloned()
    .unwrap()
}

fn card_request() -> PaymentRequest {
    let card = CardSource::new("4242424242424242", 9, current_year() + 5).with_cvv("100");
    PaymentRequest::new(PaymentRequestSource::Card(card), 1000, Currency::USD)
        .with_reference("REF_01")
        .with_three_ds(true)
        .with_customer(CustomerRequest {
            email: Some("test@user.com".to_string()),
            name: Some("Test User".to_string()),
            id: None,
        })
}

#[test]
fn test_luhn_known_cards() {
    assert!(validate_luhn(Some("4242424242424242")));
    assert!(!validate_luhn(Some("4242424242424241")));
}

#[test]
fn test_payment_source_rules() {
    let err = validate_payment_source(None, None).unwrap_err();
    assert!(err.message().starts_with("Payment source missing"));

    let valid = card_details(9);
    assert!(validate_payment_source(Some(CardInput::Details(&valid)), None).is_ok());

    let bad_month = card_details(13);
    let err = validate_payment_source(Some(CardInput::Details(&bad_month)), None).unwrap_err();
    assert_eq!(err.message(), "Invalid card data.");

    assert!(validate_payment_source(None, Some(TOKEN)).is_ok());
    assert!(validate_payment_source(None, Some("12345678-1234-1234-1234-123456789012")).is_ok());
    let err = validate_payment_source(None, Some("bogus")).unwrap_err();
    assert_eq!(err.message(), "Invalid token source.");
}

#[test]
fn test_transaction_rules() {
    assert_eq!(
        validate_transaction(-1, "USD", "Regular").unwrap_err().message(),
        "Transaction value must be equal or greater than zero"
    );
    assert_eq!(
        validate_transaction(1000, "ZZZ", "Regular").unwrap_err().message(),
        "Invalid currency."
    );
    assert!(validate_transaction(1000, "USD", "Regular").is_ok());
    assert!(validate_transaction(1000, Currency::USD, PaymentType::Regular).is_ok());
}

#[test]
fn test_customer_rules() {
    assert!(validate_customer(Some("test@user.com")).is_ok());
    assert!(validate_customer(Some("cust_12345678-1234-1234-1234-123456789012")).is_ok());
    assert!(validate_customer(Some("not-an-id-or-email")).is_err());
    assert!(validate_customer(None).is_err());
}

#[test]
fn test_validation_error_converts() {
    let err: CheckoutError = validate_customer(Some("")).unwrap_err().into();
    assert!(err.is_validation());
    assert_eq!(err.code(), "validation");
    assert!(err.request_id().is_none());
}

#[tokio::test]
async fn test_request_payment_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/payments")
                .header("Authorization", "sk_test")
                .json_body_partial(r#"{"source": {"type": "card"}, "currency": "USD"}"#);
            then.status(202)
                .header("Cko-Request-Id", "req_1")
                .json_body(json!({
                    "id": "pay_mbabizu24mvu3mela5njyhpit4",
                    "status": "Pending",
                    "reference": "REF_01",
                    "customer": {"id": "cus_1", "email": "test@user.com", "name": "Test User"},
                    "3ds": {"downgraded": false, "enrolled": "Y"},
                    "_links": {
                        "self": {"href": "https://api.sandbox.checkout.com/payments/pay_mbabizu24mvu3mela5njyhpit4"},
                        "redirect": {"href": "https://sandbox.checkout.com/api2/v2/3ds/acs/sid_1"}
                    }
                }));
        })
        .await;

    let config = Config::new("sk_test").with_base_url(server.base_url());
    let client = PaymentsClient::from_config(config).unwrap();

    let payment = client.request(&card_request()).await.unwrap();
    mock.assert_async().await;

    assert!(payment.is_pending());
    assert!(payment.requires_redirect());
    assert_eq!(payment.customer.unwrap().name.as_deref(), Some("Test User"));
}

#[tokio::test]
async fn test_invalid_payment_never_hits_the_wire() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/payments");
            then.status(201).json_body(json!({"id": "pay_1", "status": "Authorized"}));
        })
        .await;

    let client =
        PaymentsClient::from_config(Config::new("sk_test").with_base_url(server.base_url()))
            .unwrap();

    let mut request = card_request();
    let bad_number = CardSource::new("4242424242424241", 9, current_year() + 5);
    request.source = PaymentRequestSource::Card(bad_number);
    let err = client.request(&request).await.unwrap_err();

    assert!(matches!(err, CheckoutError::Validation(_)));
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_gateway_errors_are_mapped() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/payments/pay_missing");
            then.status(404).header("Cko-Request-Id", "req_404");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/payments/pay_1/captures");
            then.status(422).json_body(json!({
                "request_id": "req_422",
                "error_type": "request_invalid",
                "error_codes": ["amount_exceeds_balance"]
            }));
        })
        .await;

    let client =
        PaymentsClient::from_config(Config::new("sk_test").with_base_url(server.base_url()))
            .unwrap();

    let err = client.get("pay_missing").await.unwrap_err();
    assert!(matches!(err, CheckoutError::ResourceNotFound { .. }));
    assert_eq!(err.request_id(), Some("req_404"));

    let err = client
        .capture(
            "pay_1",
            &CaptureRequest {
                amount: Some(5000),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    match err {
        CheckoutError::InvalidRequest { error_codes, .. } => {
            assert_eq!(error_codes, vec!["amount_exceeds_balance".to_string()]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_response_body_is_null() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/payments/pay_1/voids");
            then.status(202);
        })
        .await;

    let http = HttpClient::new(Config::new("sk_test").with_base_url(server.base_url())).unwrap();
    let response = http
        .send(Method::POST, "payments/pay_1/voids", Some(json!({})))
        .await
        .unwrap();

    assert_eq!(response.status, 202);
    assert_eq!(response.body, Value::Null);
}

#[tokio::test]
async fn test_base_url_path_is_kept() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/checkout/payments/pay_1");
            then.status(200).json_body(json!({"id": "pay_1", "status": "Authorized"}));
        })
        .await;

    let base = format!("{}/checkout", server.base_url());
    let client = PaymentsClient::from_config(Config::new("sk_test").with_base_url(base)).unwrap();

    let payment = client.get("pay_1").await.unwrap();
    mock.assert_async().await;
    assert_eq!(payment.id, "pay_1");
}
