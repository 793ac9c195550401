use chrono::TimeDelta;

/// Split a playback position into whole hours, minutes and seconds.
/// Negative, NaN and infinite positions read as zero.
fn split_seconds(seconds: f64) -> (i64, i64, i64) {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as i64
    } else {
        0
    };
    let delta = TimeDelta::try_seconds(whole).unwrap_or_default();
    (
        delta.num_hours(),
        delta.num_minutes() % 60,
        delta.num_seconds() % 60,
    )
}

/// Format a position for the elapsed/total read-outs, e.g. `2:05` or `1:02:05`.
pub fn format_time(seconds: f64) -> String {
    let (hours, mins, secs) = split_seconds(seconds);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

fn unit(count: i64, singular: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Narration used for `aria-valuetext`, e.g. `2 minutes 5 seconds`.
pub fn format_human_read_time(seconds: f64) -> String {
    let (hours, mins, secs) = split_seconds(seconds);
    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if mins > 0 {
        parts.push(unit(mins, "minute"));
    }
    if secs > 0 || parts.is_empty() {
        parts.push(unit(secs, "second"));
    }
    parts.join(" ")
}
