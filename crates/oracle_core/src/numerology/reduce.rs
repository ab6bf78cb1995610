//! Number reduction and date-based vibrations.

use super::tables::{vibration, Vibration};
use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Numbers kept whole by [`reduce_with_masters`].
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

lazy_static::lazy_static! {
    static ref FRENCH_DATE: Regex =
        Regex::new(r"^\s*(\d{1,2})/(\d{1,2})/(\d{4})\s*$").expect("valid date regex");
    static ref ISO_DATE: Regex =
        Regex::new(r"^\s*(\d{4})-(\d{2})-(\d{2})(?:[T ].*)?\s*$").expect("valid date regex");
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit sum down to 1-9, stopping early on 11, 22 or 33.
/// 0 stays 0.
pub fn reduce_with_masters(n: u32) -> u8 {
    let mut value = n;
    while value > 9 && !MASTER_NUMBERS.contains(&value) {
        value = digit_sum(value);
    }
    value as u8
}

/// Closed-form reduction into [1, 9]: `((n − 1) mod 9) + 1`.
///
/// Applied directly to composite integers; master numbers are not kept.
pub fn reduce_to_9(n: i64) -> u8 {
    ((n - 1).rem_euclid(9) + 1) as u8
}

/// `year·10000 + month·100 + day`
pub fn date_composite(date: &impl Datelike) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Vibration of a calendar day, always in [1, 9].
pub fn daily_vibration(date: &impl Datelike) -> u8 {
    reduce_to_9(date_composite(date))
}

/// Parse a birth date written `DD/MM/YYYY` or ISO `YYYY-MM-DD` (an ISO time
/// part after `T` is ignored). `None` for anything that is not a real
/// calendar date.
pub fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    if let Some(caps) = FRENCH_DATE.captures(text) {
        let day = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let year = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    if let Some(caps) = ISO_DATE.captures(text) {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    None
}

/// Birth number of a date string, or 0 when it does not parse.
pub fn life_path_number(birth: &str) -> u8 {
    parse_birth_date(birth)
        .map(|date| daily_vibration(&date))
        .unwrap_or(0)
}

/// Personal vibration of `today` for someone born on `birth`:
/// `reduce_to_9(birth·3 + today·7)`. `None` when the birth date does not
/// parse.
pub fn oracle_personal(today: &impl Datelike, birth: &str) -> Option<&'static Vibration> {
    match life_path_number(birth) {
        0 => None,
        birth_number => {
            let today_number = daily_vibration(today);
            let personal = reduce_to_9(i64::from(birth_number) * 3 + i64::from(today_number) * 7);
            vibration(personal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reduce_with_masters() {
        assert_eq!(reduce_with_masters(0), 0);
        assert_eq!(reduce_with_masters(7), 7);
        assert_eq!(reduce_with_masters(28), 1);
        assert_eq!(reduce_with_masters(29), 11);
        assert_eq!(reduce_with_masters(22), 22);
        assert_eq!(reduce_with_masters(33), 33);
        assert_eq!(reduce_with_masters(44), 8);
        assert_eq!(reduce_with_masters(99), 9);
    }

    #[test]
    fn test_reduce_to_9() {
        assert_eq!(reduce_to_9(1), 1);
        assert_eq!(reduce_to_9(9), 9);
        assert_eq!(reduce_to_9(10), 1);
        assert_eq!(reduce_to_9(11), 2);
        assert_eq!(reduce_to_9(18), 9);
        assert_eq!(reduce_to_9(20_240_101), 1);
        assert_eq!(reduce_to_9(0), 9);
    }

    #[test]
    fn test_daily_vibration() {
        // 20240615 -> (20240614 mod 9) + 1 = 2
        assert_eq!(date_composite(&date(2024, 6, 15)), 20_240_615);
        assert_eq!(daily_vibration(&date(2024, 6, 15)), 2);
        assert_eq!(daily_vibration(&date(1990, 6, 15)), 4);
        assert_eq!(daily_vibration(&date(2024, 1, 1)), 1);
    }

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(parse_birth_date("15/06/1990"), Some(date(1990, 6, 15)));
        assert_eq!(parse_birth_date("5/6/1990"), Some(date(1990, 6, 5)));
        assert_eq!(parse_birth_date("1990-06-15"), Some(date(1990, 6, 15)));
        assert_eq!(parse_birth_date("1990-06-15T08:30:00.000Z"), Some(date(1990, 6, 15)));
        assert_eq!(parse_birth_date("31/02/1990"), None);
        assert_eq!(parse_birth_date("15-06-1990"), None);
        assert_eq!(parse_birth_date(""), None);
    }

    #[test]
    fn test_life_path_number() {
        assert_eq!(life_path_number("15/06/1990"), 4);
        assert_eq!(life_path_number("1990-06-15"), 4);
        assert_eq!(life_path_number("pas une date"), 0);
    }

    #[test]
    fn test_oracle_personal() {
        // birth 4, today 2: 4*3 + 2*7 = 26 -> 8
        let v = oracle_personal(&date(2024, 6, 15), "15/06/1990").unwrap();
        assert_eq!(v.number, 8);
        assert!(oracle_personal(&date(2024, 6, 15), "bientôt").is_none());
    }
}
