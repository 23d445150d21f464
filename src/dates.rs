use chrono::{Duration, Local};

/// Parse human-friendly date strings to ISO format (YYYY-MM-DD).
///
/// `None`, `""` and `"today"` all mean the current local date and
/// `"yesterday"` means the day before. Anything else passes through
/// verbatim; the Tempo API rejects strings it cannot parse and that
/// rejection is surfaced as its own error.
pub fn parse_date(input: Option<&str>) -> String {
    match input.map(str::trim) {
        None | Some("") | Some("today") => Local::now().date_naive().format("%Y-%m-%d").to_string(),
        Some("yesterday") => (Local::now().date_naive() - Duration::days(1))
            .format("%Y-%m-%d")
            .to_string(),
        Some(other) => other.to_string(),
    }
}
