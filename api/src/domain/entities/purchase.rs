//! Purchase request and result
//!
//! The single transaction handled by the service: a group of visitors, a date,
//! and how the buyer wants to pay.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::user::UserId;
use super::visitor::Visitor;

/// Currency used when the request does not name one
pub const DEFAULT_CURRENCY: &str = "ARS";

/// How the buyer pays for the tickets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(alias = "unspecified")]
    Unspecified,
    #[serde(alias = "cash")]
    Cash,
    #[serde(alias = "card")]
    Card,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Unspecified => write!(f, "Unspecified"),
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Card => write!(f, "Card"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unspecified" => Ok(PaymentMethod::Unspecified),
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(format!("Unknown payment method: {}", s)),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Ticket purchase for a group of visitors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    #[serde(default)]
    pub user_id: UserId,
    #[serde(with = "iso_date")]
    pub visit_date: NaiveDate,
    #[serde(default)]
    pub visitors: Vec<Visitor>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub buyer_email: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Outcome of a confirmed purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResult {
    pub success: bool,
    pub tickets_count: usize,
    #[serde(with = "iso_date")]
    pub visit_date: NaiveDate,
    /// Only set for card payments
    pub payment_redirect_url: Option<String>,
    pub pay_at_ticket_office: bool,
    pub confirmation_message: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub currency: String,
    /// Priced copies of the requested visitors
    pub visitors: Vec<Visitor>,
}

/// `YYYY-MM-DD` dates; surrounding whitespace is tolerated, nothing else is
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(de::Error::custom("empty date"));
        }
        NaiveDate::parse_from_str(trimmed, FORMAT).map_err(|_| {
            de::Error::custom(format!("invalid date '{}', expected format YYYY-MM-DD", raw))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PassType;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_full_request() {
        let json = r#"{
            "userId": "6f1c1d3e-2f5a-4b7e-9a51-0f9b3f7f2a10",
            "visitDate": "2031-03-14",
            "visitors": [{"age": 30, "passType": "Regular"}, {"age": 2, "passType": "Vip"}],
            "paymentMethod": "Card",
            "buyerEmail": "ana@example.com",
            "currency": "USD"
        }"#;
        let request: PurchaseRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            request.user_id.to_string(),
            "6f1c1d3e-2f5a-4b7e-9a51-0f9b3f7f2a10"
        );
        assert_eq!(
            request.visit_date,
            NaiveDate::from_ymd_opt(2031, 3, 14).unwrap()
        );
        assert_eq!(request.visitors.len(), 2);
        assert_eq!(request.visitors[1].pass_type, PassType::Vip);
        assert_eq!(request.payment_method, PaymentMethod::Card);
        assert_eq!(request.buyer_email, "ana@example.com");
        assert_eq!(request.currency, "USD");
    }

    #[test]
    fn parse_request_applies_defaults() {
        let json = r#"{"visitDate": "2031-03-14"}"#;
        let request: PurchaseRequest = serde_json::from_str(json).unwrap();

        assert!(request.visitors.is_empty());
        assert_eq!(request.payment_method, PaymentMethod::Unspecified);
        assert_eq!(request.buyer_email, "");
        assert_eq!(request.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn parse_date_with_surrounding_whitespace() {
        let json = r#"{"visitDate": " 2031-03-14 "}"#;
        let request: PurchaseRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.visit_date,
            NaiveDate::from_ymd_opt(2031, 3, 14).unwrap()
        );
    }

    #[test]
    fn reject_non_iso_dates() {
        for bad in ["14/03/2031", "2031-3-14T00:00:00", "", "   "] {
            let json = format!(r#"{{"visitDate": "{}"}}"#, bad);
            let result: Result<PurchaseRequest, _> = serde_json::from_str(&json);
            assert!(result.is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn reject_unknown_payment_method() {
        let json = r#"{"visitDate": "2031-03-14", "paymentMethod": "Bitcoin"}"#;
        let result: Result<PurchaseRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_result_wire_shape() {
        let result = PurchaseResult {
            success: true,
            tickets_count: 1,
            visit_date: NaiveDate::from_ymd_opt(2031, 3, 14).unwrap(),
            payment_redirect_url: None,
            pay_at_ticket_office: true,
            confirmation_message: "ok".to_string(),
            total_amount: dec!(5000),
            currency: "ARS".to_string(),
            visitors: vec![Visitor::new(30, PassType::Regular).priced(dec!(5000))],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["ticketsCount"], 1);
        assert_eq!(json["visitDate"], "2031-03-14");
        assert!(json["paymentRedirectUrl"].is_null());
        assert_eq!(json["payAtTicketOffice"], true);
        assert_eq!(json["totalAmount"].as_f64(), Some(5000.0));
        assert_eq!(json["currency"], "ARS");
        assert_eq!(json["visitors"][0]["price"].as_f64(), Some(5000.0));
    }

    #[test]
    fn payment_method_from_str() {
        assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!("CASH".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }
}
