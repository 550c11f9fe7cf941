//! Formatting helpers shared across pages and components.

/// Render an epoch-millis timestamp as e.g. "Mar 04, 14:30"
pub fn format_day_time(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%b %d, %H:%M").to_string())
        .unwrap_or_default()
}

/// Render an epoch-millis timestamp as e.g. "Mar 04, 2024"
pub fn format_day(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day_time() {
        // 2024-03-04 14:30:00 UTC
        assert_eq!(format_day_time(1_709_562_600_000), "Mar 04, 14:30");
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(1_709_562_600_000), "Mar 04, 2024");
    }

    #[test]
    fn test_out_of_range_timestamp_renders_empty() {
        assert_eq!(format_day_time(i64::MAX), "");
        assert_eq!(format_day(i64::MAX), "");
    }
}
