use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Spacing between consecutive monthly records.
pub const DAYS_PER_MONTH: i64 = 30;

/// Round a currency amount to cents, ties to even.
///
/// The conversion keeps the exact binary value of `value`, so ties only occur
/// when the float really sits halfway between two cents.
pub fn round_currency(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// `YYYY-MM` label for the month `months_back` steps before `now`.
pub fn month_label(now: DateTime<Utc>, months_back: usize) -> String {
    let offset = Duration::days(DAYS_PER_MONTH * months_back as i64);
    (now - offset).format("%Y-%m").to_string()
}

pub fn days_before(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(512_345.678_9), dec!(512345.68));
        assert_eq!(round_currency(100.0), dec!(100));
        assert_eq!(round_currency(0.125), dec!(0.12));
        assert_eq!(round_currency(f64::NAN), Decimal::ZERO);
    }

    #[test]
    fn test_month_label_steps_back_thirty_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(month_label(now, 0), "2024-03");
        assert_eq!(month_label(now, 1), "2024-02");
        assert_eq!(month_label(now, 3), "2023-12");
    }
}
