//! Date and clock formatting used across the dashboard surfaces.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Display format for calendar dates, e.g. "13 Apr 2024".
pub const DISPLAY_DATE_FMT: &str = "%d %b %Y";

/// en-IN short name for September; chrono's `%b` gives "Sep".
const SEPTEMBER_DATE_FMT: &str = "%d Sept %Y";

/// Format a date as two-digit day, en-IN short month name, four-digit year.
pub fn format_display_date(date: NaiveDate) -> String {
    let fmt = if date.month() == 9 {
        SEPTEMBER_DATE_FMT
    } else {
        DISPLAY_DATE_FMT
    };
    date.format(fmt).to_string()
}

/// Hour and minute stamp attached to chat messages ("09:05").
pub fn format_clock(at: NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_pads_day() {
        let d = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(format_display_date(d), "01 Apr 2024");
    }

    #[test]
    fn test_display_date_september_is_sept() {
        let d = NaiveDate::from_ymd_opt(2024, 9, 5).unwrap();
        assert_eq!(format_display_date(d), "05 Sept 2024");

        let oct = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();
        assert_eq!(format_display_date(oct), "05 Oct 2024");
    }

    #[test]
    fn test_clock_is_24h() {
        let at = NaiveDate::from_ymd_opt(2026, 2, 19)
            .unwrap()
            .and_hms_opt(17, 4, 59)
            .unwrap();
        assert_eq!(format_clock(at), "17:04");
    }
}
