use chrono::{DateTime, NaiveDate, Utc};

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Sunday-first day name, `None` outside 0..=6.
pub fn day_name(day_of_week: u8) -> Option<&'static str> {
    DAY_NAMES.get(usize::from(day_of_week)).copied()
}

/// "09:05" style display for the hour/minute pairs the API ships.
pub fn format_time_display(hour: u32, min: u32) -> String {
    format!("{hour:02}:{min:02}")
}

/// "Mon 02 Mar 2026" -- session table rows.
pub fn format_session_date(date: NaiveDate) -> String {
    date.format("%a %d %b %Y").to_string()
}

/// "02 March 2026" -- info sheets.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// "02 March 2026 09:05:12" -- the recorded check-in instant.
pub fn format_record_time(instant: DateTime<Utc>) -> String {
    instant.format("%d %B %Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn day_names_are_sunday_first() {
        assert_eq!(day_name(0), Some("Sunday"));
        assert_eq!(day_name(6), Some("Saturday"));
        assert_eq!(day_name(7), None);
    }

    #[test]
    fn times_are_zero_padded() {
        assert_eq!(format_time_display(9, 5), "09:05");
        assert_eq!(format_time_display(14, 0), "14:00");
    }

    #[test]
    fn date_displays_match_the_pages() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(format_session_date(date), "Mon 02 Mar 2026");
        assert_eq!(format_long_date(date), "02 March 2026");

        let instant = Utc.with_ymd_and_hms(2026, 3, 2, 9, 5, 12).unwrap();
        assert_eq!(format_record_time(instant), "02 March 2026 09:05:12");
    }
}
