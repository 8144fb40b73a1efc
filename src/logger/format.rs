//! Log line formatting
//!
//! Every request log line carries a local date + time prefix.

use chrono::{DateTime, Local};

/// Format one log line: `YYYY/MM/DD HH:MM:SS message`.
pub fn format_line(time: &DateTime<Local>, message: &str) -> String {
    format!("{} {message}", time.format("%Y/%m/%d %H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let time = Local
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("unambiguous local time");
        assert_eq!(
            format_line(&time, "hello ==> world"),
            "2026/01/02 03:04:05 hello ==> world"
        );
    }

    #[test]
    fn test_format_line_empty_message() {
        let time = Local
            .with_ymd_and_hms(2026, 12, 31, 23, 59, 59)
            .single()
            .expect("unambiguous local time");
        assert_eq!(format_line(&time, ""), "2026/12/31 23:59:59 ");
    }
}
