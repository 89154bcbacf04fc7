//! Display Formatting Helpers
//!
//! Card-facing formatting: the compact relative "last updated" label and
//! quantity rendering that matches how the backend's JSON prints numbers.

use chrono::NaiveDateTime;

/// Format a backend timestamp relative to `now`
///
/// "Just now" under a minute, then `{n}m ago`, `{n}h ago`, `{n}d ago`,
/// and a plain date once the entry is a week old.
pub fn relative_time(timestamp: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

/// Format a material quantity the way the backend's JSON renders it:
/// whole values without a decimal point, fractional values as-is
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = base();

        assert_eq!(relative_time(now, now), "Just now");
        assert_eq!(relative_time(now - Duration::seconds(59), now), "Just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1m ago");
        assert_eq!(relative_time(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(relative_time(now - Duration::hours(1), now), "1h ago");
        assert_eq!(relative_time(now - Duration::hours(23), now), "23h ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "1d ago");
        assert_eq!(relative_time(now - Duration::days(6), now), "6d ago");
    }

    #[test]
    fn test_relative_time_falls_back_to_date_at_a_week() {
        let now = base();
        assert_eq!(relative_time(now - Duration::days(7), now), "2025-03-07");
        assert_eq!(relative_time(now - Duration::days(40), now), "2025-02-02");
    }

    #[test]
    fn test_relative_time_future_timestamp_reads_just_now() {
        let now = base();
        assert_eq!(relative_time(now + Duration::minutes(5), now), "Just now");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(12.0), "12");
        assert_eq!(format_quantity(12.5), "12.5");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(0.25), "0.25");
    }
}
