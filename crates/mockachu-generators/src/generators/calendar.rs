//! Date, time and timestamp producers.
//!
//! Ranges are inclusive. Output formats are strftime strings validated at
//! field-resolution time, so formatting here cannot fail.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use rand::Rng;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Default lower bound for date ranges.
pub fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Default lower bound for time ranges.
pub fn day_start() -> NaiveTime {
    NaiveTime::MIN
}

/// Default upper bound for time ranges (23:59, matching the classic
/// "end of day" UI default).
pub fn day_end() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN)
}

/// Parse a `START_DATE`/`END_DATE` parameter. `%Y-%m-%d` and `%Y/%m/%d`
/// are accepted.
pub fn parse_date_param(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y/%m/%d"))
        .ok()
}

/// Parse a `START_TIME`/`END_TIME` parameter. `%H:%M:%S` and `%H:%M` are
/// accepted.
pub fn parse_time_param(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Random date in `[start, end]`, rendered with `format`.
///
/// Rendering goes through a midnight `NaiveDateTime` so that any format
/// the resolver accepted is renderable (time fields come out as zeros).
pub fn random_date<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
    format: &str,
) -> String {
    let span = (end - start).num_days();
    let date = start + Duration::days(rng.random_range(0..=span));
    date.and_time(NaiveTime::MIN).format(format).to_string()
}

/// Random time in `[start, end]`, rendered with `format`.
///
/// Rendering goes through an epoch-dated `NaiveDateTime`, matching the
/// resolver's format validation.
pub fn random_time<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveTime,
    end: NaiveTime,
    format: &str,
) -> String {
    let from = start.num_seconds_from_midnight();
    let to = end.num_seconds_from_midnight();
    let seconds = rng.random_range(from..=to);
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(start);
    epoch_date().and_time(time).format(format).to_string()
}

/// Random datetime across the combined range.
///
/// With a `DATETIME_FORMAT` the value is drawn uniformly between
/// `start_date start_time` and `end_date end_time`; without one, a date and
/// a time are drawn independently and joined with a space (each using its
/// own default format).
pub fn random_date_time<R: Rng + ?Sized>(
    rng: &mut R,
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    format: Option<&str>,
) -> String {
    match format {
        Some(format) => {
            let start = start_date.and_time(start_time);
            let end = end_date.and_time(end_time);
            let span = (end - start).num_seconds();
            let value = if span <= 0 {
                start
            } else {
                start + Duration::seconds(rng.random_range(0..=span))
            };
            value.format(format).to_string()
        }
        None => {
            let date = random_date(rng, start_date, end_date, DEFAULT_DATE_FORMAT);
            let time = random_time(rng, start_time, end_time, DEFAULT_TIME_FORMAT);
            format!("{date} {time}")
        }
    }
}

/// Random unix timestamp in `[start, end]`.
pub fn random_timestamp<R: Rng + ?Sized>(rng: &mut R, start: i64, end: i64) -> i64 {
    rng.random_range(start..=end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(s: &str) -> NaiveDate {
        parse_date_param(s).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date_param("2020-05-17"), parse_date_param("2020/05/17"));
        assert!(parse_date_param("17.05.2020").is_none());
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(
            parse_time_param("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert!(parse_time_param("9am").is_none());
    }

    #[test]
    fn test_random_date_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = date("2020-01-01");
        let end = date("2020-12-31");

        for _ in 0..100 {
            let out = random_date(&mut rng, start, end, DEFAULT_DATE_FORMAT);
            let parsed = date(&out);
            assert!(parsed >= start && parsed <= end);
        }
    }

    #[test]
    fn test_random_time_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = parse_time_param("08:00").unwrap();
        let end = parse_time_param("17:00").unwrap();

        for _ in 0..100 {
            let out = random_time(&mut rng, start, end, DEFAULT_TIME_FORMAT);
            let parsed = parse_time_param(&out).unwrap();
            assert!(parsed >= start && parsed <= end);
        }
    }

    #[test]
    fn test_random_date_time_custom_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let out = random_date_time(
            &mut rng,
            date("2021-06-01"),
            date("2021-06-30"),
            day_start(),
            day_end(),
            Some("%Y-%m-%dT%H:%M:%S"),
        );
        assert!(out.starts_with("2021-06-"));
        assert!(out.contains('T'));
    }

    #[test]
    fn test_random_date_time_default_join() {
        let mut rng = StdRng::seed_from_u64(42);
        let out = random_date_time(
            &mut rng,
            date("2021-06-01"),
            date("2021-06-30"),
            day_start(),
            day_end(),
            None,
        );
        let (date_part, time_part) = out.split_once(' ').unwrap();
        assert!(parse_date_param(date_part).is_some());
        assert!(parse_time_param(time_part).is_some());
    }

    #[test]
    fn test_random_timestamp_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let ts = random_timestamp(&mut rng, 1_000, 2_000);
            assert!((1_000..=2_000).contains(&ts));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let start = date("2020-01-01");
        let end = date("2024-12-31");

        assert_eq!(
            random_date(&mut rng1, start, end, DEFAULT_DATE_FORMAT),
            random_date(&mut rng2, start, end, DEFAULT_DATE_FORMAT)
        );
    }
}
