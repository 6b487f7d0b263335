//! HTTP client for the payments API.
//!
//! [`PaymentsClient`] validates every request with the functions in
//! [`crate::validator`] before handing it to a [`Transport`]. Invalid input never reaches
//! the network: it fails with [`CheckoutError::Validation`] instead.

use crate::config::Config;
use crate::enums::PaymentType;
use crate::errors::{CheckoutError, Result, ValidationError};
use crate::types::{
    ActionResponse, CaptureRequest, PaymentAction, PaymentRequest, PaymentRequestSource,
    PaymentResponse, RefundRequest, VoidRequest,
};
use crate::validator::{
    is_number, validate_customer, validate_payment_source, validate_transaction, CardInput,
    INVALID_TRANSACTION_VALUE,
};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Header carrying the gateway's request id.
pub const REQUEST_ID_HEADER: &str = "Cko-Request-Id";

/// Message of the error raised for an empty payment id.
pub const PAYMENT_ID_REQUIRED: &str = "Payment id is required.";

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body, `Null` when empty
    pub body: Value,
}

/// Sends requests to the gateway.
///
/// Implementations map non-success statuses to the API variants of [`CheckoutError`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `body` to `path`, relative to the API root.
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<ApiResponse>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: Config,
    base: Url,
    http_client: Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_type: Option<String>,
    #[serde(default)]
    error_codes: Vec<String>,
}

impl HttpClient {
    /// Creates a client for the given configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use checkout_sdk::client::HttpClient;
    /// use checkout_sdk::config::Config;
    ///
    /// let client = HttpClient::new(Config::new("sk_test")).unwrap();
    /// assert_eq!(client.base_url().as_str(), "https://api.sandbox.checkout.com/");
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        let base = config.api_base()?;
        let http_client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            base,
            http_client,
        })
    }

    /// The API root requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<ApiResponse> {
        let url = self.base.join(path)?;
        tracing::debug!(%method, %url, "sending request");

        let mut request = self
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, &self.config.secret_key);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let text = response.text().await?;
        tracing::debug!(status = status.as_u16(), ?request_id, "received response");

        if status.is_success() {
            let body = if text.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&text)?
            };
            return Ok(ApiResponse {
                status: status.as_u16(),
                body,
            });
        }

        tracing::warn!(status = status.as_u16(), ?request_id, "request rejected by gateway");
        Err(api_error(status, request_id, text))
    }
}

fn api_error(status: StatusCode, request_id: Option<String>, text: String) -> CheckoutError {
    match status {
        StatusCode::UNAUTHORIZED => CheckoutError::Authentication { request_id },
        StatusCode::NOT_FOUND => CheckoutError::ResourceNotFound { request_id },
        StatusCode::TOO_MANY_REQUESTS => CheckoutError::TooManyRequests { request_id },
        StatusCode::UNPROCESSABLE_ENTITY => {
            let parsed = serde_json::from_str::<ErrorBody>(&text).ok();
            let (error_type, error_codes) = match parsed {
                Some(body) => (
                    body.error_type.unwrap_or_else(|| "request_invalid".to_string()),
                    body.error_codes,
                ),
                None => ("request_invalid".to_string(), Vec::new()),
            };
            CheckoutError::InvalidRequest {
                request_id,
                error_type,
                error_codes,
            }
        }
        _ => CheckoutError::Api {
            status: status.as_u16(),
            request_id,
            body: if text.is_empty() { None } else { Some(text) },
        },
    }
}

/// Client for the `/payments` endpoints.
#[derive(Debug, Clone)]
pub struct PaymentsClient<T = HttpClient> {
    transport: T,
}

impl PaymentsClient<HttpClient> {
    /// Creates a client that talks HTTP using `config`.
    pub fn from_config(config: Config) -> Result<Self> {
        Ok(Self::new(HttpClient::new(config)?))
    }
}

impl<T: Transport> PaymentsClient<T> {
    /// Wraps a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Requests a payment.
    ///
    /// Checks the payment source, then the amount, currency and payment type (`Regular`
    /// when unset), then the customer id or email, and only then sends the request.
    pub async fn request(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        validate_payment_request(request).inspect_err(|err| {
            tracing::warn!(error = %err, "payment request rejected before sending")
        })?;

        let body = serde_json::to_value(request)?;
        let response = self.transport.send(Method::POST, "payments", Some(body)).await?;
        parse(response)
    }

    /// Retrieves a payment.
    pub async fn get(&self, payment_id: &str) -> Result<PaymentResponse> {
        let path = payment_path(payment_id, None)?;
        let response = self.transport.send(Method::GET, &path, None).await?;
        parse(response)
    }

    /// Lists the actions performed on a payment.
    pub async fn actions(&self, payment_id: &str) -> Result<Vec<PaymentAction>> {
        let path = payment_path(payment_id, Some("actions"))?;
        let response = self.transport.send(Method::GET, &path, None).await?;
        parse(response)
    }

    /// Captures an authorized payment, fully or partially.
    pub async fn capture(
        &self,
        payment_id: &str,
        request: &CaptureRequest,
    ) -> Result<ActionResponse> {
        validate_amount(request.amount)?;
        self.post_action(payment_id, "captures", serde_json::to_value(request)?)
            .await
    }

    /// Refunds a captured payment, fully or partially.
    pub async fn refund(
        &self,
        payment_id: &str,
        request: &RefundRequest,
    ) -> Result<ActionResponse> {
        validate_amount(request.amount)?;
        self.post_action(payment_id, "refunds", serde_json::to_value(request)?)
            .await
    }

    /// Voids an authorized payment.
    pub async fn void(&self, payment_id: &str, request: &VoidRequest) -> Result<ActionResponse> {
        self.post_action(payment_id, "voids", serde_json::to_value(request)?)
            .await
    }

    async fn post_action(
        &self,
        payment_id: &str,
        action: &str,
        body: Value,
    ) -> Result<ActionResponse> {
        let path = payment_path(payment_id, Some(action))?;
        let response = self.transport.send(Method::POST, &path, Some(body)).await?;
        parse(response)
    }
}

/// Runs every pre-flight check a payment request goes through.
///
/// Card details and card ids are checked as cards, tokens as tokens; customer and
/// alternative payment method sources carry nothing to check on the client.
pub fn validate_payment_request(
    request: &PaymentRequest,
) -> std::result::Result<(), ValidationError> {
    match &request.source {
        PaymentRequestSource::Card(card) => {
            validate_payment_source(Some(CardInput::Source(card)), None)?
        }
        PaymentRequestSource::Id { id } => {
            validate_payment_source(Some(CardInput::Id(id.as_str())), None)?
        }
        PaymentRequestSource::Token { token } => {
            validate_payment_source(None, Some(token.as_str()))?
        }
        _ => {}
    }

    let payment_type = request.payment_type.unwrap_or(PaymentType::Regular);
    validate_transaction(request.amount, request.currency, payment_type)?;

    let customer = request.customer.as_ref().and_then(|c| c.identifier());
    validate_customer(customer)
}

fn validate_amount(amount: Option<i64>) -> std::result::Result<(), ValidationError> {
    match amount {
        Some(amount) if !is_number(&Value::from(amount), Some(0), None) => {
            Err(ValidationError::new(INVALID_TRANSACTION_VALUE))
        }
        _ => Ok(()),
    }
}

fn payment_path(
    payment_id: &str,
    action: Option<&str>,
) -> std::result::Result<String, ValidationError> {
    if payment_id.trim().is_empty() {
        return Err(ValidationError::new(PAYMENT_ID_REQUIRED));
    }
    let id: String = url::form_urlencoded::byte_serialize(payment_id.as_bytes()).collect();
    Ok(match action {
        Some(action) => format!("payments/{}/{}", id, action),
        None => format!("payments/{}", id),
    })
}

fn parse<R: DeserializeOwned>(response: ApiResponse) -> Result<R> {
    Ok(serde_json::from_value(response.body)?)
}
