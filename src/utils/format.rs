//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_time_ms() {
        let dt = Local
            .with_ymd_and_hms(2024, 5, 1, 9, 3, 7)
            .single()
            .expect("unambiguous local time");
        assert_eq!(format_time_ms(&dt), "09:03:07.000");
    }
}
