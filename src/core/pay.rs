//! Pay engine.
//!
//! Pure functions turning a clocked interval and an hourly rate into the
//! amounts recorded for a payroll entry:
//!
//! - elapsed hours, rounded to 2 decimal places
//! - gross pay, with time-and-a-half above 40 hours
//! - the tax/net split at a fixed 15% tax rate
//!
//! All amounts are `Decimal` and rounded half away from zero.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::{AppError, AppResult};
use crate::utils::time::format_ts;

/// Hours above this threshold are paid at [`OVERTIME_MULTIPLIER`].
pub const OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Time-and-a-half.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Fixed tax rate (15%), not user-editable.
pub const TAX_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// The amounts derived from one closed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayBreakdown {
    pub hours: Decimal,
    pub gross: Decimal,
    pub tax: Decimal,
    pub net: Decimal,
}

/// Round to cents (or hundredths of an hour).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Hours between `start` and `end`, rounded to 2 decimal places.
///
/// Returns [`AppError::EndBeforeStart`] if `end` precedes `start`.
pub fn elapsed_hours(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<Decimal> {
    if end < start {
        return Err(AppError::EndBeforeStart {
            start: format_ts(&start),
            end: format_ts(&end),
        });
    }

    let seconds = Decimal::from((end - start).num_seconds());
    Ok(round2(seconds / SECONDS_PER_HOUR))
}

/// Gross pay for `hours` worked at `rate`.
///
/// Up to [`OVERTIME_THRESHOLD`] hours are paid at `rate`; every hour beyond
/// is paid at `rate × 1.5`.
///
/// ```
/// use paytrack::core::pay::gross_pay;
/// use rust_decimal::Decimal;
///
/// let gross = gross_pay(Decimal::from(45), Decimal::from(20)).unwrap();
/// assert_eq!(gross, Decimal::from(950));
/// ```
pub fn gross_pay(hours: Decimal, rate: Decimal) -> AppResult<Decimal> {
    if hours < Decimal::ZERO {
        return Err(AppError::NegativeHours(hours.to_string()));
    }
    if rate < Decimal::ZERO {
        return Err(AppError::NegativeRate(rate.to_string()));
    }

    let gross = if hours > OVERTIME_THRESHOLD {
        let regular = OVERTIME_THRESHOLD.checked_mul(rate);
        let overtime = (hours - OVERTIME_THRESHOLD)
            .checked_mul(rate)
            .and_then(|v| v.checked_mul(OVERTIME_MULTIPLIER));
        regular.zip(overtime).and_then(|(r, o)| r.checked_add(o))
    } else {
        hours.checked_mul(rate)
    };

    gross
        .map(round2)
        .ok_or_else(|| AppError::AmountOverflow(format!("{} hrs @ {}", hours, rate)))
}

/// Split `gross` into `(tax, net)` at `tax_rate`.
pub fn tax_split(gross: Decimal, tax_rate: Decimal) -> AppResult<(Decimal, Decimal)> {
    let overflow = || AppError::AmountOverflow(format!("tax on {}", gross));

    let tax = round2(gross.checked_mul(tax_rate).ok_or_else(overflow)?);
    let net = round2(gross.checked_sub(tax).ok_or_else(overflow)?);
    Ok((tax, net))
}

/// Run the whole engine for one closed session at the fixed [`TAX_RATE`].
pub fn compute(start: NaiveDateTime, end: NaiveDateTime, rate: Decimal) -> AppResult<PayBreakdown> {
    let hours = elapsed_hours(start, end)?;
    let gross = gross_pay(hours, rate)?;
    let (tax, net) = tax_split(gross, TAX_RATE)?;

    Ok(PayBreakdown {
        hours,
        gross,
        tax,
        net,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_ts;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_elapsed_hours_full_day() {
        let start = parse_ts("2025-01-01T09:00:00").unwrap();
        let end = parse_ts("2025-01-01T17:30:00").unwrap();
        assert_eq!(elapsed_hours(start, end).unwrap(), dec("8.5"));
    }

    #[test]
    fn test_elapsed_hours_rounds_to_hundredths() {
        // 20 minutes = 0.3333.. hours
        let start = parse_ts("2025-01-01T09:00:00").unwrap();
        let end = parse_ts("2025-01-01T09:20:00").unwrap();
        assert_eq!(elapsed_hours(start, end).unwrap(), dec("0.33"));
    }

    #[test]
    fn test_elapsed_hours_zero_length() {
        let t = parse_ts("2025-01-01T09:00:00").unwrap();
        assert_eq!(elapsed_hours(t, t).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_elapsed_hours_rejects_reversed_interval() {
        let start = parse_ts("2025-01-01T17:00:00").unwrap();
        let end = parse_ts("2025-01-01T09:00:00").unwrap();
        assert!(matches!(
            elapsed_hours(start, end),
            Err(AppError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn test_gross_pay_with_overtime() {
        assert_eq!(gross_pay(dec("45"), dec("20")).unwrap(), dec("950"));
    }

    #[test]
    fn test_gross_pay_at_threshold_has_no_premium() {
        assert_eq!(gross_pay(dec("40"), dec("20")).unwrap(), dec("800"));
    }

    #[test]
    fn test_gross_pay_rejects_negative_inputs() {
        assert!(matches!(
            gross_pay(dec("-1"), dec("20")),
            Err(AppError::NegativeHours(_))
        ));
        assert!(matches!(
            gross_pay(dec("1"), dec("-20")),
            Err(AppError::NegativeRate(_))
        ));
    }

    #[test]
    fn test_gross_pay_zero_rate_is_unpaid() {
        assert_eq!(gross_pay(dec("8"), Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_gross_pay_overflow_is_an_error() {
        assert!(matches!(
            gross_pay(dec("8"), Decimal::MAX),
            Err(AppError::AmountOverflow(_))
        ));
        let huge = Decimal::from_scientific("1e28").unwrap();
        assert!(matches!(
            gross_pay(dec("45"), huge),
            Err(AppError::AmountOverflow(_))
        ));
    }

    #[test]
    fn test_tax_split_on_overtime_week() {
        assert_eq!(
            tax_split(dec("950"), TAX_RATE).unwrap(),
            (dec("142.5"), dec("807.5"))
        );
    }

    #[test]
    fn test_tax_split_rounds_half_away_from_zero() {
        // 0.15 * 10.10 = 1.515
        assert_eq!(
            tax_split(dec("10.10"), TAX_RATE).unwrap(),
            (dec("1.52"), dec("8.58"))
        );
    }

    #[test]
    fn test_compute_one_hour_at_twenty() {
        let start = parse_ts("2025-03-03T09:00:00").unwrap();
        let end = parse_ts("2025-03-03T10:00:00").unwrap();
        let pay = compute(start, end, dec("20")).unwrap();
        assert_eq!(pay.hours, dec("1.00"));
        assert_eq!(pay.gross, dec("20.00"));
        assert_eq!(pay.tax, dec("3.00"));
        assert_eq!(pay.net, dec("17.00"));
    }

    proptest! {
        #[test]
        fn prop_no_overtime_is_linear(hundredths in 0i64..=4000, cents in 1i64..=100_000) {
            let hours = Decimal::new(hundredths, 2);
            let rate = Decimal::new(cents, 2);
            prop_assert_eq!(gross_pay(hours, rate).unwrap(), round2(hours * rate));
        }

        #[test]
        fn prop_overtime_formula(hundredths in 4001i64..=20_000, cents in 1i64..=100_000) {
            let hours = Decimal::new(hundredths, 2);
            let rate = Decimal::new(cents, 2);
            let expected = Decimal::from(40) * rate
                + (hours - Decimal::from(40)) * rate * dec("1.5");
            prop_assert_eq!(gross_pay(hours, rate).unwrap(), round2(expected));
        }

        #[test]
        fn prop_tax_plus_net_is_gross(cents in 0i64..=10_000_000) {
            let gross = Decimal::new(cents, 2);
            let (tax, net) = tax_split(gross, TAX_RATE).unwrap();
            prop_assert_eq!(tax + net, gross);
            prop_assert!(tax <= gross);
        }
    }
}
