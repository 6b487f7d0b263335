//! Requests a card payment against the sandbox.
//!
//! Reads `CKO_SECRET_KEY` (and the other `CKO_*` settings) from the environment or a
//! `.env` file. Run with `RUST_LOG=checkout_sdk=debug` to see the requests.

use checkout_sdk::client::PaymentsClient;
use checkout_sdk::config::Config;
use checkout_sdk::enums::Currency;
use checkout_sdk::types::{CardSource, CustomerRequest, PaymentRequest, PaymentRequestSource};
use checkout_sdk::utils::current_year;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("checkout_sdk=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let config = Config::from_env()?;
    tracing::info!(environment = ?config.environment, "starting");
    let client = PaymentsClient::from_config(config)?;

    let card = CardSource::new("4242424242424242", 9, current_year() + 2).with_cvv("100");
    let request = PaymentRequest::new(PaymentRequestSource::Card(card), 1000, Currency::USD)
        .with_reference("REF_01")
        .with_three_ds(true)
        .with_customer(CustomerRequest {
            email: Some("test@user.com".to_string()),
            name: Some("Test User".to_string()),
            id: None,
        });

    let payment = client.request(&request).await?;
    println!("Payment {} is {}", payment.id, payment.status);
    if let Some(redirect) = payment.redirect_link() {
        println!("Redirect the customer to {}", redirect);
    }

    for action in client.actions(&payment.id).await? {
        println!("  {} {} approved={:?}", action.id, action.action_type, action.approved);
    }

    Ok(())
}
