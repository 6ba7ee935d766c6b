//! Core pricing calculation functions.
//!
//! Pure functions for stay math - no I/O, no clock reads. Everything here
//! is fully determined by its arguments, so the booking screen can call
//! it on every date-picker or guest-selector change.

use chrono::NaiveDate;

use crate::money::{round_money, Money};
use crate::pricing::models::ServiceFee;

/// Whole calendar nights between check-in and check-out.
///
/// Day-difference on date-only values: no time-of-day, no time zone, so
/// the count is identical whatever locale the browser reports. Negative
/// when the range is inverted; validation rejects that before pricing.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// `nights * nightly_rate`, exact in minor units.
pub fn nightly_subtotal(nights: i64, nightly_rate: Money) -> Money {
    nightly_rate * nights
}

/// Resolve a listing's service fee for a given nightly subtotal.
///
/// Fixed fees are copied through untouched; rate-based fees apply the
/// fraction to the subtotal and banker's-round to minor units. Listing
/// validation caps the rate at 1, so the product fits; a rate large
/// enough to overflow `Decimal` saturates to the money ceiling and is
/// caught by that validation rather than panicking mid-computation.
pub fn service_fee_amount(fee: &ServiceFee, nightly_subtotal: Money) -> Money {
    match fee {
        ServiceFee::Fixed(amount) => *amount,
        ServiceFee::Rate(rate) => match nightly_subtotal.to_decimal().checked_mul(*rate) {
            Some(fee) => Money::from_decimal(round_money(fee, 2)),
            None => Money::from_minor(i64::MAX),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== nights_between tests ====================

    #[test]
    fn test_nights_between_basic() {
        assert_eq!(nights_between(date(2024, 6, 1), date(2024, 6, 4)), 3);
        assert_eq!(nights_between(date(2024, 6, 1), date(2024, 6, 2)), 1);
    }

    #[test]
    fn test_nights_between_same_day_and_inverted() {
        assert_eq!(nights_between(date(2024, 6, 1), date(2024, 6, 1)), 0);
        assert_eq!(nights_between(date(2024, 6, 4), date(2024, 6, 1)), -3);
    }

    #[test]
    fn test_nights_between_month_boundary() {
        assert_eq!(nights_between(date(2024, 6, 28), date(2024, 7, 2)), 4);
    }

    #[test]
    fn test_nights_between_year_boundary() {
        assert_eq!(nights_between(date(2024, 12, 30), date(2025, 1, 2)), 3);
    }

    #[test]
    fn test_nights_between_leap_day() {
        // 2024 is a leap year
        assert_eq!(nights_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(nights_between(date(2023, 2, 28), date(2023, 3, 1)), 1);
    }

    // ==================== subtotal / fee tests ====================

    #[test]
    fn test_nightly_subtotal() {
        let rate = Money::from_decimal(dec!(175.00));
        assert_eq!(nightly_subtotal(3, rate), Money::from_decimal(dec!(525.00)));
        assert_eq!(nightly_subtotal(1, rate), rate);
    }

    #[test]
    fn test_service_fee_fixed_passthrough() {
        let fee = ServiceFee::Fixed(Money::from_decimal(dec!(35.00)));
        let subtotal = Money::from_decimal(dec!(525.00));
        assert_eq!(service_fee_amount(&fee, subtotal), Money::from_decimal(dec!(35.00)));
    }

    #[test]
    fn test_service_fee_rate_applied() {
        let fee = ServiceFee::Rate(dec!(0.10));
        let subtotal = Money::from_decimal(dec!(525.00));
        assert_eq!(service_fee_amount(&fee, subtotal), Money::from_decimal(dec!(52.50)));
    }

    #[test]
    fn test_service_fee_rate_bankers_rounding() {
        // 150.00 * 0.1235 = 18.525, exactly halfway -> rounds to even cent
        let fee = ServiceFee::Rate(dec!(0.1235));
        let subtotal = Money::from_decimal(dec!(150.00));
        assert_eq!(service_fee_amount(&fee, subtotal), Money::from_minor(1852));
    }

    #[test]
    fn test_service_fee_extreme_rate_does_not_panic() {
        use rust_decimal::Decimal;

        // Multiplying the subtotal by Decimal::MAX overflows the checked
        // multiply; the result saturates instead of panicking and is far
        // beyond what listing validation accepts.
        let fee = ServiceFee::Rate(Decimal::MAX);
        let subtotal = Money::from_decimal(dec!(525.00));
        assert_eq!(service_fee_amount(&fee, subtotal), Money::from_minor(i64::MAX));
    }

    #[test]
    fn test_service_fee_zero_rate() {
        let fee = ServiceFee::Rate(dec!(0));
        let subtotal = Money::from_decimal(dec!(525.00));
        assert_eq!(service_fee_amount(&fee, subtotal), Money::ZERO);
    }
}
