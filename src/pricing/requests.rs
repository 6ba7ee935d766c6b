//! Request DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::money::Money;
use crate::pricing::models::{Property, ServiceFee, StayRequest, StaySelection};

/// Quote request posted by the booking and property-details screens.
///
/// The screens already hold the property record they fetched from the
/// marketplace backend, so it rides along inline - the engine never
/// does its own lookup.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub property: PropertyPayload,
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    pub guests: i32,
    /// Reference calendar day for the past-date check. Defaults to the
    /// current UTC day when omitted; tests supply it for determinism.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl QuoteRequest {
    pub fn stay_request(&self) -> StayRequest {
        StayRequest {
            property_id: self.property.id,
            selection: StaySelection {
                check_in: self.check_in,
                check_out: self.check_out,
            },
            guests: self.guests,
        }
    }
}

/// Listing fields the engine needs, in major-unit decimal strings the
/// way the backend serves them.
#[derive(Debug, Deserialize)]
pub struct PropertyPayload {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub nightly_rate: Decimal,
    pub max_guests: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub cleaning_fee: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub service_fee: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub service_fee_rate: Option<Decimal>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl PropertyPayload {
    /// Convert to the domain type, moving money into minor units.
    ///
    /// A fixed `service_fee` wins over `service_fee_rate` when both are
    /// present; neither means no service fee.
    pub fn into_property(self) -> Property {
        let service_fee = match (self.service_fee, self.service_fee_rate) {
            (Some(fixed), _) => ServiceFee::Fixed(Money::from_decimal(fixed)),
            (None, Some(rate)) => ServiceFee::Rate(rate),
            (None, None) => ServiceFee::Fixed(Money::ZERO),
        };
        Property {
            id: self.id,
            nightly_rate: Money::from_decimal(self.nightly_rate),
            max_guests: self.max_guests,
            cleaning_fee: Money::from_decimal(self.cleaning_fee),
            service_fee,
            currency: self.currency,
        }
    }
}
