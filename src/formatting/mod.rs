/// Render a second count as hours, always keeping at least one decimal so
/// 14400 reads "4.0" and 26100 reads "7.25".
pub fn format_hours(seconds: i64) -> String {
    let hours = seconds as f64 / 3600.0;
    let tenths = hours * 10.0;
    if (tenths - tenths.round()).abs() < 1e-9 {
        format!("{:.1}", hours)
    } else {
        format!("{:.2}", hours)
    }
}
