//! Parsing of `"H:MM"` duration text.
//!
//! Timekeeping exports render every duration as hours and zero-padded
//! minutes with no upper bound on hours (`"31:05"` is a valid monthly
//! culmination). Anything else is treated as zero.

/// Converts `"H:MM"` text to minutes.
///
/// Empty, placeholder (`"-"`) or malformed text yields `0`; the engine
/// under-reports rather than failing on bad input.
///
/// # Examples
///
/// ```
/// use attendance_engine::analysis::parse_duration_minutes;
///
/// assert_eq!(parse_duration_minutes("9:00"), 540);
/// assert_eq!(parse_duration_minutes("0:45"), 45);
/// assert_eq!(parse_duration_minutes("31:05"), 1865);
/// assert_eq!(parse_duration_minutes(""), 0);
/// assert_eq!(parse_duration_minutes("9:5"), 0);
/// ```
pub fn parse_duration_minutes(text: &str) -> u32 {
    let text = text.trim();
    let Some((hours, minutes)) = text.split_once(':') else {
        return 0;
    };

    if hours.is_empty()
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return 0;
    }

    match (hours.parse::<u32>(), minutes.parse::<u32>()) {
        (Ok(h), Ok(m)) if m < 60 => h.saturating_mul(60).saturating_add(m),
        _ => 0,
    }
}

/// Renders minutes back to `"H:MM"` for violation details.
pub fn format_duration(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
