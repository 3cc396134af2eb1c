//! Formatting utilities for human-readable output.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO-8601 timestamp (`2025-02-01T10:00:00`) as `Feb 1, 2025`.
///
/// Anything that does not start with a `YYYY-MM-DD` date is returned as is,
/// and an empty string becomes "Unknown".
///
/// # Examples
///
/// ```ignore
/// use syllabus::utils::formatting::format_date;
///
/// assert_eq!(format_date("2025-02-01T10:00:00.123456"), "Feb 1, 2025");
/// assert_eq!(format_date("yesterday"), "yesterday");
/// ```
pub fn format_date(timestamp: &str) -> String {
    if timestamp.trim().is_empty() {
        return "Unknown".to_string();
    }

    let date = timestamp.get(..10).unwrap_or(timestamp);
    parse_calendar_date(date).unwrap_or_else(|| timestamp.to_string())
}

fn parse_calendar_date(date: &str) -> Option<String> {
    let mut parts = date.splitn(3, '-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let name = MONTHS.get(month.checked_sub(1)?)?;
    (1..=31)
        .contains(&day)
        .then(|| format!("{} {}, {}", name, day, year))
}

/// Result count shown above the listing.
pub fn format_material_count(total: usize) -> String {
    match total {
        0 => "No materials".to_string(),
        1 => "1 material".to_string(),
        n => format!("{} materials", n),
    }
}
