// Date utility functions

use chrono::{DateTime, Duration, Local, NaiveDate};

/// Midnight at the start of the given day, in local time.
pub fn start_of_day(date: NaiveDate) -> DateTime<Local> {
    date.and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}

/// The last representable instant of the given day (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> DateTime<Local> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}

/// A local instant at the given hour and minute of `date`.
pub fn at_hm(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Local> {
    date.and_hms_opt(hour, minute, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}

/// The seven consecutive days shown in the picker, starting at `first`.
pub fn week_days(first: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| first + Duration::days(i as i64))
}

pub fn is_same_day(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.date_naive() == b.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn test_start_of_day() {
        let start = start_of_day(day());
        assert_eq!(start.time().hour(), 0);
        assert_eq!(start.time().minute(), 0);
        assert_eq!(start.date_naive(), day());
    }

    #[test]
    fn test_end_of_day_is_last_millisecond() {
        let end = end_of_day(day());
        assert_eq!(end.time().hour(), 23);
        assert_eq!(end.time().minute(), 59);
        assert_eq!(end.time().second(), 59);
        assert_eq!(end.date_naive(), day());
    }

    #[test]
    fn test_week_days_are_consecutive() {
        let days = week_days(day());
        assert_eq!(days.len(), 7);
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_is_same_day() {
        assert!(is_same_day(at_hm(day(), 0, 0), at_hm(day(), 23, 59)));
        assert!(!is_same_day(
            at_hm(day(), 23, 59),
            at_hm(day() + Duration::days(1), 0, 0)
        ));
    }
}
