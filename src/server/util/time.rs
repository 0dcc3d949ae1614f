//! Date and time parsing and formatting.
//!
//! All timestamps are naive UTC. Dates travel as `YYYY-MM-DD` and times of day as `HH:MM`,
//! with `HH:MM:SS` also accepted on input.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::server::error::validation::ValidationError;

/// Length of a bookable slot.
pub const SLOT_LENGTH_HOURS: i64 = 1;

/// Current time as naive UTC, the representation stored in the database.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid(field, format!("{:?} is not a YYYY-MM-DD date", value)))
}

pub fn parse_time_of_day(field: &'static str, value: &str) -> Result<NaiveTime, ValidationError> {
    let value = value.trim();

    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ValidationError::invalid(field, format!("{:?} is not a HH:MM time", value)))
}

/// `HH:MM`
pub fn hour_minute(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// `HH:MM:SS`
pub fn hour_minute_second(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// `YYYY-MM-DD`
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Slot tag used in game identifiers, the zero padded 24-hour hour followed by `AM` before
/// noon and `PM` from noon on, e.g. `09AM` or `18PM`.
pub fn slot_label(start_time: NaiveTime) -> String {
    let hour = start_time.hour();

    format!("{:02}{}", hour, if hour < 12 { "AM" } else { "PM" })
}

/// Whether a slot starting at `date` `start_time` had ended by `now`.
pub fn is_completed(now: NaiveDateTime, date: NaiveDate, start_time: NaiveTime) -> bool {
    now > date.and_time(start_time) + Duration::hours(SLOT_LENGTH_HOURS)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn slot_labels_follow_hour() {
        assert_eq!(slot_label(at(9, 0)), "09AM");
        assert_eq!(slot_label(at(11, 30)), "11AM");
        assert_eq!(slot_label(at(12, 0)), "12PM");
        assert_eq!(slot_label(at(18, 0)), "18PM");
    }

    #[test]
    fn accepts_times_with_and_without_seconds() {
        assert_eq!(parse_time_of_day("start_time", "14:00").unwrap(), at(14, 0));
        assert_eq!(parse_time_of_day("start_time", "14:00:00").unwrap(), at(14, 0));
        assert!(parse_time_of_day("start_time", "2pm").is_err());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("date", "2025-06-01").is_ok());
        assert!(parse_date("date", "01/06/2025").is_err());
    }

    #[test]
    fn completed_only_after_slot_ends() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let start = at(18, 0);

        assert!(!is_completed(date.and_time(at(18, 30)), date, start));
        assert!(!is_completed(date.and_time(at(19, 0)), date, start));
        assert!(is_completed(date.and_time(at(19, 1)), date, start));
    }
}
