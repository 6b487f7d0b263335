//! Closed enumerations accepted by the payments API.
//!
//! Each enumeration maps to a fixed set of wire strings and exposes a membership test
//! against that set, which the validator uses to accept either a typed value or the raw
//! string a caller already has.

/// An enumeration backed by a closed set of string values.
pub trait StringEnum: Copy + Sized + 'static {
    /// Every member, in declaration order.
    const MEMBERS: &'static [Self];

    /// The wire value of this member.
    fn value(&self) -> &'static str;

    /// Looks a member up by its exact wire value.
    fn from_value(value: &str) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.value() == value)
    }

    /// Returns true if `value` is the wire value of some member.
    fn has_value(value: &str) -> bool {
        Self::from_value(value).is_some()
    }
}

/// Error returned when parsing a string that is not a member of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownValue {
    kind: &'static str,
    value: String,
}

impl UnknownValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::enums::StringEnum for $name {
            const MEMBERS: &'static [Self] = &[ $( $name::$variant, )+ ];

            fn value(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::StringEnum::value(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::enums::UnknownValue;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::enums::StringEnum>::from_value(s)
                    .ok_or_else(|| $crate::enums::UnknownValue::new(stringify!($name), s))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::enums::StringEnum::value(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use string_enum;

string_enum! {
    /// ISO 4217 currencies accepted by the gateway.
    #[allow(missing_docs)]
    pub enum Currency {
        AED => "AED", AFN => "AFN", ALL => "ALL", AMD => "AMD", ANG => "ANG", AOA => "AOA",
        ARS => "ARS", AUD => "AUD", AWG => "AWG", AZN => "AZN", BAM => "BAM", BBD => "BBD",
        BDT => "BDT", BGN => "BGN", BHD => "BHD", BIF => "BIF", BMD => "BMD", BND => "BND",
        BOB => "BOB", BRL => "BRL", BSD => "BSD", BTN => "BTN", BWP => "BWP", BYN => "BYN",
        BZD => "BZD", CAD => "CAD", CDF => "CDF", CHF => "CHF", CLF => "CLF", CLP => "CLP",
        CNY => "CNY", COP => "COP", CRC => "CRC", CUP => "CUP", CVE => "CVE", CZK => "CZK",
        DJF => "DJF", DKK => "DKK", DOP => "DOP", DZD => "DZD", EEK => "EEK", EGP => "EGP",
        ERN => "ERN", ETB => "ETB", EUR => "EUR", FJD => "FJD", FKP => "FKP", GBP => "GBP",
        GEL => "GEL", GHS => "GHS", GIP => "GIP", GMD => "GMD", GNF => "GNF", GTQ => "GTQ",
        GYD => "GYD", HKD => "HKD", HNL => "HNL", HRK => "HRK", HTG => "HTG", HUF => "HUF",
        IDR => "IDR", ILS => "ILS", INR => "INR", IQD => "IQD", IRR => "IRR", ISK => "ISK",
        JMD => "JMD", JOD => "JOD", JPY => "JPY", KES => "KES", KGS => "KGS", KHR => "KHR",
        KMF => "KMF", KPW => "KPW", KRW => "KRW", KWD => "KWD", KYD => "KYD", KZT => "KZT",
        LAK => "LAK", LBP => "LBP", LKR => "LKR", LRD => "LRD", LSL => "LSL", LTL => "LTL",
        LVL => "LVL", LYD => "LYD", MAD => "MAD", MDL => "MDL", MGA => "MGA", MKD => "MKD",
        MMK => "MMK", MNT => "MNT", MOP => "MOP", MRU => "MRU", MUR => "MUR", MVR => "MVR",
        MWK => "MWK", MXN => "MXN", MYR => "MYR", MZN => "MZN", NAD => "NAD", NGN => "NGN",
        NIO => "NIO", NOK => "NOK", NPR => "NPR", NZD => "NZD", OMR => "OMR", PAB => "PAB",
        PEN => "PEN", PGK => "PGK", PHP => "PHP", PKR => "PKR", PLN => "PLN", PYG => "PYG",
        QAR => "QAR", RON => "RON", RSD => "RSD", RUB => "RUB", RWF => "RWF", SAR => "SAR",
        SBD => "SBD", SCR => "SCR", SDG => "SDG", SEK => "SEK", SGD => "SGD", SHP => "SHP",
        SLL => "SLL", SOS => "SOS", SRD => "SRD", STN => "STN", SVC => "SVC", SYP => "SYP",
        SZL => "SZL", THB => "THB", TJS => "TJS", TMT => "TMT", TND => "TND", TOP => "TOP",
        TRY => "TRY", TTD => "TTD", TWD => "TWD", TZS => "TZS", UAH => "UAH", UGX => "UGX",
        USD => "USD", UYU => "UYU", UZS => "UZS", VEF => "VEF", VND => "VND", VUV => "VUV",
        WST => "WST", XAF => "XAF", XCD => "XCD", XOF => "XOF", XPF => "XPF", YER => "YER",
        ZAR => "ZAR", ZMW => "ZMW", ZWL => "ZWL",
    }
}

string_enum! {
    /// How a payment was initiated.
    pub enum PaymentType {
        /// One-off customer initiated payment
        Regular => "Regular",
        /// Subsequent payment of a recurring series
        Recurring => "Recurring",
        /// Mail order / telephone order
        Moto => "MOTO",
        /// Installment plan payment
        Installment => "Installment",
        /// Merchant initiated, unscheduled
        Unscheduled => "Unscheduled",
    }
}

string_enum! {
    /// Discriminator of a payment request source.
    pub enum PaymentSourceType {
        /// Full card details
        Card => "card",
        /// Stored card id
        Id => "id",
        /// Card token
        Token => "token",
        /// Customer's default instrument
        Customer => "customer",
        /// Network token
        NetworkToken => "network_token",
        /// iDEAL bank transfer
        Ideal => "ideal",
        /// Sofort bank transfer
        Sofort => "sofort",
        /// Tamara buy now pay later
        Tamara => "tamara",
        /// PayPal
        Paypal => "paypal",
        /// WeChat Pay (Alipay+)
        WechatPay => "wechatpay",
        /// Alipay CN (Alipay+)
        AlipayCn => "alipay_cn",
        /// GCash (Alipay+)
        Gcash => "gcash",
        /// DANA (Alipay+)
        Dana => "dana",
        /// Kakao Pay (Alipay+)
        KakaoPay => "kakaopay",
        /// TrueMoney (Alipay+)
        TrueMoney => "truemoney",
        /// Touch 'n Go (Alipay+)
        Tng => "tng",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_membership() {
        assert!(Currency::has_value("USD"));
        assert!(Currency::has_value("GBP"));
        assert!(!Currency::has_value("ZZZ"));
        assert!(!Currency::has_value("usd"));
        assert_eq!(Currency::EUR.value(), "EUR");
    }

    #[test]
    fn test_payment_type_values() {
        assert_eq!(PaymentType::Moto.value(), "MOTO");
        assert!(PaymentType::has_value("Regular"));
        assert!(!PaymentType::has_value("regular"));
        assert_eq!("Recurring".parse::<PaymentType>().unwrap(), PaymentType::Recurring);
    }

    #[test]
    fn test_unknown_value_error() {
        let err = "XYZ".parse::<Currency>().unwrap_err();
        assert_eq!(err.to_string(), "unknown Currency value: XYZ");
    }

    #[test]
    fn test_serde_uses_wire_values() {
        let json = serde_json::to_string(&PaymentSourceType::AlipayCn).unwrap();
        assert_eq!(json, "\"alipay_cn\"");

        let currency: Currency = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(currency, Currency::JPY);
        assert!(serde_json::from_str::<Currency>("\"ABC\"").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PaymentSourceType::WechatPay.to_string(), "wechatpay");
        assert_eq!(Currency::MEMBERS.len(), 159);
    }
}
