/// Formats a signed mission time as a launch clock, `T-MM:SS` below one hour
/// and `T+HH:MM:SS` from one hour on. Fractional seconds are truncated.
pub fn format_mission_time(seconds: f64) -> String {
    let sign = if seconds >= 0.0 { '+' } else { '-' };
    let total = seconds.abs().floor();

    let hours = (total / 3600.0).floor() as u64;
    let minutes = ((total % 3600.0) / 60.0).floor() as u64;
    let secs = (total % 60.0) as u64;

    if seconds.abs() < 3600.0 {
        format!("T{}{:02}:{:02}", sign, minutes, secs)
    } else {
        format!("T{}{:02}:{:02}:{:02}", sign, hours, minutes, secs)
    }
}
