//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::money::Money;
use crate::pricing::models::PriceBreakdown;

/// Money value for JSON responses: major-unit decimal string plus the
/// listing's currency. Display formatting beyond this is the caller's
/// job.
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Money, currency: &str) -> Self {
        Self {
            amount: amount.to_decimal(),
            currency: currency.to_string(),
        }
    }
}

/// Itemized quote for a stay.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub property_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub nights: i64,
    pub nightly_rate: MoneyResponse,
    pub nightly_subtotal: MoneyResponse,
    pub cleaning_fee: MoneyResponse,
    pub service_fee: MoneyResponse,
    pub total: MoneyResponse,
}

impl QuoteResponse {
    pub fn new(
        property_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: i32,
        breakdown: &PriceBreakdown,
    ) -> Self {
        let currency = breakdown.currency.as_str();
        Self {
            property_id,
            check_in,
            check_out,
            guests,
            nights: breakdown.nights,
            nightly_rate: MoneyResponse::new(breakdown.nightly_rate, currency),
            nightly_subtotal: MoneyResponse::new(breakdown.nightly_subtotal, currency),
            cleaning_fee: MoneyResponse::new(breakdown.cleaning_fee, currency),
            service_fee: MoneyResponse::new(breakdown.service_fee, currency),
            total: MoneyResponse::new(breakdown.total, currency),
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_response_serializes_as_string() {
        let money = MoneyResponse::new(Money::from_minor(63500), "USD");
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json["amount"], "635.00");
        assert_eq!(json["currency"], "USD");
    }

    #[test]
    fn test_quote_response_shape() {
        let breakdown = PriceBreakdown {
            nights: 3,
            nightly_rate: Money::from_decimal(dec!(175.00)),
            nightly_subtotal: Money::from_decimal(dec!(525.00)),
            cleaning_fee: Money::from_decimal(dec!(75.00)),
            service_fee: Money::from_decimal(dec!(35.00)),
            total: Money::from_decimal(dec!(635.00)),
            currency: "USD".to_string(),
        };
        let check_in = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let check_out = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let response = QuoteResponse::new(1, check_in, check_out, 2, &breakdown);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["nights"], 3);
        assert_eq!(json["total"]["amount"], "635.00");
        assert_eq!(json["check_in"], "2024-06-01");
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let err = PricingErrorResponse {
            error_type: "invalid_range".to_string(),
            message: "check-out must be after check-in".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("details").is_none());
    }
}
