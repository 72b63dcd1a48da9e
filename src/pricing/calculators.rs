//! Core pricing calculation functions.
//!
//! Pure functions for lift pass pricing - no database access.
//! Multipliers are exact decimals so the final ceiling never suffers from
//! binary floating point drift (35 * 0.7 must be 24.5, not 24.499...).

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::models::{AgeBracket, PassType};

/// Percentage taken off day passes on a non-holiday Monday
pub const MONDAY_REDUCTION_PERCENT: u32 = 35;

const CHILD_DAY_MULTIPLIER: Decimal = dec!(0.7);
const SENIOR_DAY_MULTIPLIER: Decimal = dec!(0.75);
const SENIOR_NIGHT_MULTIPLIER: Decimal = dec!(0.4);

/// Day-of-week reduction for a visit date.
///
/// Returns 35 only when a date is given, it falls on a Monday and it is not
/// a holiday. A holiday always cancels the Monday reduction.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use liftpass_pricing::pricing::reduction_percent;
///
/// let monday = NaiveDate::from_ymd_opt(2019, 2, 11).unwrap();
/// assert_eq!(reduction_percent(Some(monday), false), 35);
/// assert_eq!(reduction_percent(Some(monday), true), 0);
/// assert_eq!(reduction_percent(None, false), 0);
/// ```
pub fn reduction_percent(visit_date: Option<NaiveDate>, is_holiday: bool) -> u32 {
    match visit_date {
        Some(date) if date.weekday() == Weekday::Mon && !is_holiday => MONDAY_REDUCTION_PERCENT,
        _ => 0,
    }
}

/// Round a price up to the next whole unit, saturating at the `i64` bounds.
pub fn round_up(amount: Decimal) -> i64 {
    let rounded = amount.ceil();
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Compute the final cost of a lift pass.
///
/// # Arguments
/// * `pass_type` - Day or night pass
/// * `base_price` - Configured undiscounted price for the pass type
/// * `age` - Rider age, if given
/// * `visit_date` - Visit date, if given
/// * `is_holiday` - Whether `visit_date` is a holiday; ignored without a date
///
/// # Returns
/// Cost rounded up to the nearest integer
pub fn evaluate(
    pass_type: PassType,
    base_price: i32,
    age: Option<u32>,
    visit_date: Option<NaiveDate>,
    is_holiday: bool,
) -> i64 {
    let base = Decimal::from(base_price);
    let bracket = AgeBracket::classify(age);

    let cost = match pass_type {
        PassType::Night => match bracket {
            AgeBracket::Infant | AgeBracket::Unstated => Decimal::ZERO,
            AgeBracket::Child | AgeBracket::Adult => base,
            AgeBracket::Senior => base * SENIOR_NIGHT_MULTIPLIER,
        },
        PassType::Day => {
            let reduction = reduction_percent(visit_date, is_holiday);
            let reduced = Decimal::ONE - Decimal::from(reduction) / dec!(100);

            match bracket {
                AgeBracket::Infant => Decimal::ZERO,
                AgeBracket::Child => {
                    // Children pay the flat rate; the Monday reduction never stacks.
                    let _unused_reduction = reduced;
                    base * CHILD_DAY_MULTIPLIER
                }
                AgeBracket::Adult | AgeBracket::Unstated => base * reduced,
                AgeBracket::Senior => base * SENIOR_DAY_MULTIPLIER * reduced,
            }
        }
    };

    round_up(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    // 2019-02-11 Monday, 2019-02-13 Wednesday, 2019-02-18 Monday + holiday
    const DAY_BASE: i32 = 35;
    const NIGHT_BASE: i32 = 19;

    // ==================== reduction_percent tests ====================

    #[test]
    fn test_reduction_monday_non_holiday() {
        assert_eq!(reduction_percent(date(2019, 2, 11), false), 35);
    }

    #[test]
    fn test_reduction_holiday_overrides_monday() {
        assert_eq!(reduction_percent(date(2019, 2, 18), true), 0);
        assert_eq!(reduction_percent(date(2019, 2, 25), true), 0);
        assert_eq!(reduction_percent(date(2019, 3, 4), true), 0);
    }

    #[test]
    fn test_reduction_other_weekdays() {
        assert_eq!(reduction_percent(date(2019, 2, 12), false), 0);
        assert_eq!(reduction_percent(date(2019, 2, 13), false), 0);
        assert_eq!(reduction_percent(date(2019, 2, 17), false), 0); // Sunday
        assert_eq!(reduction_percent(date(2019, 2, 22), true), 0);
    }

    #[test]
    fn test_reduction_without_date() {
        assert_eq!(reduction_percent(None, false), 0);
        assert_eq!(reduction_percent(None, true), 0);
    }

    #[test]
    fn test_reduction_proleptic_gregorian() {
        // 1600-01-03 and 2400-01-03 are Mondays
        assert_eq!(reduction_percent(date(1600, 1, 3), false), 35);
        assert_eq!(reduction_percent(date(2400, 1, 3), false), 35);
    }

    // ==================== round_up tests ====================

    #[test]
    fn test_round_up() {
        assert_eq!(round_up(dec!(24.5)), 25);
        assert_eq!(round_up(dec!(17.0625)), 18);
        assert_eq!(round_up(dec!(7.6)), 8);
        assert_eq!(round_up(dec!(35)), 35);
        assert_eq!(round_up(dec!(0)), 0);
    }

    #[test]
    fn test_round_up_saturates_out_of_range() {
        assert_eq!(round_up(Decimal::MAX), i64::MAX);
        assert_eq!(round_up(Decimal::MIN), i64::MIN);
        assert_eq!(round_up(dec!(9223372036854775807)), i64::MAX);
    }

    // ==================== evaluate: free riders ====================

    #[test]
    fn test_under_six_is_free_for_both_types() {
        for pass in PassType::ALL {
            assert_eq!(evaluate(pass, DAY_BASE, Some(0), None, false), 0);
            assert_eq!(evaluate(pass, DAY_BASE, Some(5), None, false), 0);
            assert_eq!(evaluate(pass, DAY_BASE, Some(5), date(2019, 2, 11), false), 0);
            assert_eq!(evaluate(pass, DAY_BASE, Some(5), date(2019, 2, 18), true), 0);
        }
    }

    // ==================== evaluate: night pass ====================

    #[test]
    fn test_night_without_age_is_free() {
        assert_eq!(evaluate(PassType::Night, NIGHT_BASE, None, None, false), 0);
        assert_eq!(evaluate(PassType::Night, NIGHT_BASE, None, date(2019, 2, 13), false), 0);
    }

    #[test]
    fn test_night_full_price_from_six_to_sixty_four() {
        for age in [6, 14, 15, 25, 64] {
            assert_eq!(evaluate(PassType::Night, NIGHT_BASE, Some(age), None, false), 19);
        }
    }

    #[test]
    fn test_night_senior() {
        // ceil(19 * 0.4) = ceil(7.6) = 8
        assert_eq!(evaluate(PassType::Night, NIGHT_BASE, Some(65), None, false), 8);
        assert_eq!(evaluate(PassType::Night, NIGHT_BASE, Some(80), None, false), 8);
    }

    #[test]
    fn test_night_ignores_date() {
        for age in [None, Some(5), Some(10), Some(25), Some(65)] {
            let undated = evaluate(PassType::Night, NIGHT_BASE, age, None, false);
            for (day, holiday) in [
                (date(2019, 2, 11), false),
                (date(2019, 2, 13), false),
                (date(2019, 2, 18), true),
            ] {
                assert_eq!(evaluate(PassType::Night, NIGHT_BASE, age, day, holiday), undated);
            }
        }
    }

    // ==================== evaluate: day pass ====================

    #[test]
    fn test_day_child_flat_rate() {
        // ceil(35 * 0.7) = ceil(24.5) = 25
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(6), None, false), 25);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(14), None, false), 25);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(10), date(2019, 2, 13), false), 25);
    }

    #[test]
    fn test_day_child_ignores_monday_reduction() {
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(10), date(2019, 2, 11), false), 25);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(10), date(2019, 2, 18), true), 25);
    }

    #[test]
    fn test_day_adult() {
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(15), None, false), 35);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(64), None, false), 35);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(25), date(2019, 2, 13), false), 35);
        // ceil(35 * 0.65) = ceil(22.75) = 23
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(25), date(2019, 2, 11), false), 23);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(25), date(2019, 2, 18), true), 35);
    }

    #[test]
    fn test_day_unstated_age_matches_adult() {
        assert_eq!(evaluate(PassType::Day, DAY_BASE, None, None, false), 35);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, None, date(2019, 2, 11), false), 23);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, None, date(2019, 2, 25), true), 35);
    }

    #[test]
    fn test_day_senior() {
        // ceil(35 * 0.75) = ceil(26.25) = 27
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(65), None, false), 27);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(80), date(2019, 2, 13), false), 27);
        // ceil(35 * 0.75 * 0.65) = ceil(17.0625) = 18
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(65), date(2019, 2, 11), false), 18);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(65), date(2019, 2, 18), true), 27);
    }

    #[test]
    fn test_holiday_flag_without_date_is_ignored() {
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(25), None, true), 35);
        assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(65), None, true), 27);
    }

    #[test]
    fn test_zero_base_price() {
        assert_eq!(evaluate(PassType::Day, 0, Some(25), date(2019, 2, 11), false), 0);
        assert_eq!(evaluate(PassType::Night, 0, Some(70), None, false), 0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let first = evaluate(PassType::Day, DAY_BASE, Some(65), date(2019, 2, 11), false);
        for _ in 0..10 {
            assert_eq!(evaluate(PassType::Day, DAY_BASE, Some(65), date(2019, 2, 11), false), first);
        }
    }
}
