//! Request and response models for the payments API.
//!
//! Models are plain data holders. Request models serialize to the gateway's snake_case
//! JSON; optional fields are omitted when unset.

use crate::enums::{Currency, PaymentSourceType, PaymentType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Postal address.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Address {
    /// First line of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,

    /// Second line of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,

    /// City or town
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State, county or province
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Two-letter ISO country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Phone number.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Phone {
    /// International dialing code, e.g. `+44`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Number without the dialing code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// Full card details.
///
/// # Examples
///
/// ```
/// use checkout_sdk::types::CardSource;
///
/// let card = CardSource::new("4242424242424242", 9, 2099).with_cvv("100");
/// assert_eq!(card.cvv.as_deref(), Some("100"));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardSource {
    /// Card number (PAN)
    pub number: String,

    /// Expiry month, 1 to 12
    pub expiry_month: u32,

    /// Four-digit expiry year
    pub expiry_year: i32,

    /// Card verification value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,

    /// Cardholder name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Billing address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    /// Cardholder phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
}

impl CardSource {
    /// Creates card details with the mandatory fields.
    pub fn new(number: impl Into<String>, expiry_month: u32, expiry_year: i32) -> Self {
        Self {
            number: number.into(),
            expiry_month,
            expiry_year,
            cvv: None,
            name: None,
            billing_address: None,
            phone: None,
        }
    }

    /// Sets the CVV.
    pub fn with_cvv(mut self, cvv: impl Into<String>) -> Self {
        self.cvv = Some(cvv.into());
        self
    }

    /// Sets the cardholder name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the billing address.
    pub fn with_billing_address(mut self, address: Address) -> Self {
        self.billing_address = Some(address);
        self
    }

    /// Sets the cardholder phone.
    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }
}

/// iDEAL bank transfer details.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct IdealSource {
    /// BIC of the customer's bank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,

    /// Description shown on the bank statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Language of the bank's payment page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// The source of funds of a payment request, tagged by `type` on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentRequestSource {
    /// Full card details
    Card(CardSource),
    /// A stored card or instrument id
    Id {
        /// Instrument id, e.g. `card_...` or `src_...`
        id: String,
    },
    /// A single-use card token
    Token {
        /// Token, e.g. `tok_...`
        token: String,
    },
    /// The default instrument of an existing customer
    Customer {
        /// Customer id
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// Customer email
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
    /// iDEAL
    Ideal(IdealSource),
    /// Sofort
    Sofort,
    /// Tamara buy now, pay later
    Tamara {
        /// Billing address
        #[serde(skip_serializing_if = "Option::is_none")]
        billing_address: Option<Address>,
    },
    /// PayPal
    Paypal,
    /// WeChat Pay
    #[serde(rename = "wechatpay")]
    WechatPay {
        /// Billing address
        #[serde(skip_serializing_if = "Option::is_none")]
        billing_address: Option<Address>,
    },
    /// Alipay+ China
    AlipayCn,
    /// Alipay+ GCash
    Gcash,
    /// Alipay+ DANA
    Dana,
    /// Alipay+ Kakao Pay
    #[serde(rename = "kakaopay")]
    KakaoPay,
    /// Alipay+ TrueMoney
    #[serde(rename = "truemoney")]
    TrueMoney,
    /// Alipay+ Touch 'n Go
    Tng,
}

impl PaymentRequestSource {
    /// Source for a stored card or instrument id.
    pub fn id(id: impl Into<String>) -> Self {
        PaymentRequestSource::Id { id: id.into() }
    }

    /// Source for a card token.
    pub fn token(token: impl Into<String>) -> Self {
        PaymentRequestSource::Token {
            token: token.into(),
        }
    }

    /// Alipay+ China wallet.
    pub fn alipay_plus_cn() -> Self {
        PaymentRequestSource::AlipayCn
    }

    /// Alipay+ GCash wallet.
    pub fn alipay_plus_gcash() -> Self {
        PaymentRequestSource::Gcash
    }

    /// Alipay+ DANA wallet.
    pub fn alipay_plus_dana() -> Self {
        PaymentRequestSource::Dana
    }

    /// Alipay+ Kakao Pay wallet.
    pub fn alipay_plus_kakao_pay() -> Self {
        PaymentRequestSource::KakaoPay
    }

    /// Alipay+ TrueMoney wallet.
    pub fn alipay_plus_true_money() -> Self {
        PaymentRequestSource::TrueMoney
    }

    /// Alipay+ Touch 'n Go wallet.
    pub fn alipay_plus_tng() -> Self {
        PaymentRequestSource::Tng
    }

    /// The `type` discriminator sent on the wire.
    pub fn source_type(&self) -> PaymentSourceType {
        match self {
            PaymentRequestSource::Card(_) => PaymentSourceType::Card,
            PaymentRequestSource::Id { .. } => PaymentSourceType::Id,
            PaymentRequestSource::Token { .. } => PaymentSourceType::Token,
            PaymentRequestSource::Customer { .. } => PaymentSourceType::Customer,
            PaymentRequestSource::Ideal(_) => PaymentSourceType::Ideal,
            PaymentRequestSource::Sofort => PaymentSourceType::Sofort,
            PaymentRequestSource::Tamara { .. } => PaymentSourceType::Tamara,
            PaymentRequestSource::Paypal => PaymentSourceType::Paypal,
            PaymentRequestSource::WechatPay { .. } => PaymentSourceType::WechatPay,
            PaymentRequestSource::AlipayCn => PaymentSourceType::AlipayCn,
            PaymentRequestSource::Gcash => PaymentSourceType::Gcash,
            PaymentRequestSource::Dana => PaymentSourceType::Dana,
            PaymentRequestSource::KakaoPay => PaymentSourceType::KakaoPay,
            PaymentRequestSource::TrueMoney => PaymentSourceType::TrueMoney,
            PaymentRequestSource::Tng => PaymentSourceType::Tng,
        }
    }
}

/// Customer attached to a payment request.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CustomerRequest {
    /// Existing customer id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Customer email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Customer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CustomerRequest {
    /// The identifier the gateway will use: the id if present, else the email.
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().or(self.email.as_deref())
    }
}

/// 3-D Secure options.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ThreeDsRequest {
    /// Whether to attempt 3-D Secure authentication
    pub enabled: bool,

    /// Whether to proceed if the card is not enrolled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_n3d: Option<bool>,
}

/// Body of `POST /payments`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// Source of funds
    pub source: PaymentRequestSource,

    /// Amount in the minor unit of `currency`
    pub amount: i64,

    /// Three-letter currency code
    pub currency: Currency,

    /// How the payment was initiated; `Regular` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,

    /// Merchant reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Description of the payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether to capture immediately after authorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,

    /// Customer details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRequest>,

    /// 3-D Secure options
    #[serde(rename = "3ds", skip_serializing_if = "Option::is_none")]
    pub three_ds: Option<ThreeDsRequest>,

    /// Where to send the customer after a successful redirect flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,

    /// Where to send the customer after a failed redirect flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,

    /// Arbitrary key/value pairs stored with the payment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl PaymentRequest {
    /// Creates a request with the mandatory fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use checkout_sdk::enums::Currency;
    /// use checkout_sdk::types::{PaymentRequest, PaymentRequestSource};
    ///
    /// let request = PaymentRequest::new(PaymentRequestSource::Paypal, 1000, Currency::EUR)
    ///     .with_reference("ORD-5023");
    /// assert_eq!(request.reference.as_deref(), Some("ORD-5023"));
    /// ```
    pub fn new(source: PaymentRequestSource, amount: i64, currency: Currency) -> Self {
        Self {
            source,
            amount,
            currency,
            payment_type: None,
            reference: None,
            description: None,
            capture: None,
            customer: None,
            three_ds: None,
            success_url: None,
            failure_url: None,
            metadata: None,
        }
    }

    /// Sets the payment type.
    pub fn with_payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    /// Sets the merchant reference.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Sets the customer.
    pub fn with_customer(mut self, customer: CustomerRequest) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Enables or disables 3-D Secure.
    pub fn with_three_ds(mut self, enabled: bool) -> Self {
        self.three_ds = Some(ThreeDsRequest {
            enabled,
            attempt_n3d: None,
        });
        self
    }

    /// Sets whether to capture immediately.
    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = Some(capture);
        self
    }
}

/// Body of `POST /payments/{id}/captures`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CaptureRequest {
    /// Amount to capture; the full authorized amount when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Merchant reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Arbitrary key/value pairs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Body of `POST /payments/{id}/refunds`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RefundRequest {
    /// Amount to refund; the full captured amount when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Merchant reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Arbitrary key/value pairs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Body of `POST /payments/{id}/voids`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VoidRequest {
    /// Merchant reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Arbitrary key/value pairs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// A hypermedia link.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Link {
    /// Absolute URL
    pub href: String,
}

/// Customer as returned by the gateway.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomerResponse {
    /// Customer id
    pub id: String,

    /// Customer email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Customer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// 3-D Secure enrollment of a pending payment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThreeDsEnrollment {
    /// Whether the payment was downgraded to non-3DS
    #[serde(default)]
    pub downgraded: bool,

    /// Enrollment status reported by the scheme (`Y`, `N` or `U`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrolled: Option<String>,
}

/// Payment as returned by `POST /payments` and `GET /payments/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentResponse {
    /// Payment id
    pub id: String,

    /// Status, e.g. `Authorized`, `Pending`, `Declined`
    pub status: String,

    /// Id of the action that produced this response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,

    /// Amount in minor units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// Whether the payment was approved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,

    /// Gateway response code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,

    /// Human readable summary of the response code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_summary: Option<String>,

    /// Merchant reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerResponse>,

    /// 3-D Secure enrollment
    #[serde(rename = "3ds", skip_serializing_if = "Option::is_none")]
    pub three_ds: Option<ThreeDsEnrollment>,

    /// Source details as echoed by the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,

    /// Related resources, keyed by relation name
    #[serde(rename = "_links", default)]
    pub links: HashMap<String, Link>,
}

impl PaymentResponse {
    /// Returns true while the payment awaits further action, e.g. a 3-D Secure redirect.
    pub fn is_pending(&self) -> bool {
        self.status == "Pending"
    }

    /// Returns true if the customer has to be redirected to complete the payment.
    pub fn requires_redirect(&self) -> bool {
        self.links.contains_key("redirect")
    }

    /// The URL to redirect the customer to, if any.
    pub fn redirect_link(&self) -> Option<&str> {
        self.links.get("redirect").map(|link| link.href.as_str())
    }
}

/// An action (authorization, capture, refund, void) performed on a payment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentAction {
    /// Action id
    pub id: String,

    /// Action type, e.g. `Authorization`, `Capture`
    #[serde(rename = "type")]
    pub action_type: String,

    /// When the action was processed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_on: Option<String>,

    /// Amount in minor units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Whether the action was approved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,

    /// Gateway response code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,

    /// Merchant reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Acknowledgement of a capture, refund or void (HTTP 202).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionResponse {
    /// Id of the new action
    pub action_id: String,

    /// Merchant reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Related resources
    #[serde(rename = "_links", default)]
    pub links: HashMap<String, Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_source_serialization() {
        let request = PaymentRequest::new(
            PaymentRequestSource::Card(CardSource::new("4242424242424242", 9, 2099).with_cvv("100")),
            1000,
            Currency::USD,
        )
        .with_three_ds(true);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["source"]["type"], "card");
        assert_eq!(json["source"]["expiry_month"], 9);
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["3ds"]["enabled"], true);
        assert!(json.get("payment_type").is_none());
    }

    #[test]
    fn test_apm_source_types() {
        let json = serde_json::to_value(PaymentRequestSource::alipay_plus_kakao_pay()).unwrap();
        assert_eq!(json, json!({"type": "kakaopay"}));

        let wechat = PaymentRequestSource::WechatPay {
            billing_address: Some(Address {
                country: Some("CN".to_string()),
                ..Default::default()
            }),
        };
        let json = serde_json::to_value(&wechat).unwrap();
        assert_eq!(json["type"], "wechatpay");
        assert_eq!(json["billing_address"]["country"], "CN");

        assert_eq!(PaymentRequestSource::alipay_plus_tng().source_type(), PaymentSourceType::Tng);
        assert_eq!(
            PaymentRequestSource::Ideal(IdealSource::default()).source_type(),
            PaymentSourceType::Ideal
        );
    }

    #[test]
    fn test_source_type_matches_wire_tag() {
        use crate::enums::StringEnum;

        let sources = vec![
            PaymentRequestSource::token("tok_x"),
            PaymentRequestSource::id("card_x"),
            PaymentRequestSource::Sofort,
            PaymentRequestSource::alipay_plus_cn(),
            PaymentRequestSource::alipay_plus_true_money(),
            PaymentRequestSource::Tamara { billing_address: None },
        ];
        for source in sources {
            let json = serde_json::to_value(&source).unwrap();
            assert_eq!(json["type"], source.source_type().value());
        }
    }

    #[test]
    fn test_pending_payment_response() {
        let response: PaymentResponse = serde_json::from_value(json!({
            "id": "pay_y3oqhf46pyzuxjbcn2giaqnb44",
            "status": "Pending",
            "reference": "REF_01",
            "customer": {"id": "cus_y3oqhf46pyzuxjbcn2giaqnb44", "email": "test@user.com"},
            "3ds": {"downgraded": false, "enrolled": "Y"},
            "_links": {
                "self": {"href": "https://api.sandbox.checkout.com/payments/pay_y3oqhf46pyzuxjbcn2giaqnb44"},
                "redirect": {"href": "https://3ds.example.com/redirect"}
            }
        }))
        .unwrap();

        assert!(response.is_pending());
        assert!(response.requires_redirect());
        assert_eq!(response.redirect_link(), Some("https://3ds.example.com/redirect"));
        assert_eq!(response.three_ds.unwrap().enrolled.as_deref(), Some("Y"));
    }

    #[test]
    fn test_processed_payment_response() {
        let response: PaymentResponse = serde_json::from_value(json!({
            "id": "pay_1",
            "action_id": "act_1",
            "status": "Authorized",
            "approved": true,
            "amount": 1000,
            "currency": "USD"
        }))
        .unwrap();

        assert!(!response.is_pending());
        assert!(!response.requires_redirect());
        assert_eq!(response.currency, Some(Currency::USD));
        assert!(response.links.is_empty());
    }

    #[test]
    fn test_customer_identifier() {
        let customer = CustomerRequest {
            email: Some("test@user.com".to_string()),
            ..Default::default()
        };
        assert_eq!(customer.identifier(), Some("test@user.com"));

        let customer = CustomerRequest {
            id: Some("cust_1".to_string()),
            email: Some("test@user.com".to_string()),
            name: None,
        };
        assert_eq!(customer.identifier(), Some("cust_1"));
    }
}
