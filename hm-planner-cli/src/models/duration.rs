/// Whole seconds, as entered for a race time.
pub type TimeDuration = u64;

/// Parse "ss", "mm:ss" or "hh:mm:ss" into seconds.
///
/// Any empty or non-numeric component rejects the whole input.
pub fn parse_duration(text: &str) -> Option<TimeDuration> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let parts = text
        .split(':')
        .map(|part| part.trim().parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;

    let (hh, mm, ss) = match parts.as_slice() {
        [ss] => (0, 0, *ss),
        [mm, ss] => (0, *mm, *ss),
        [hh, mm, ss] => (*hh, *mm, *ss),
        _ => return None,
    };

    hh.checked_mul(3600)?
        .checked_add(mm.checked_mul(60)?)?
        .checked_add(ss)
}

/// Render seconds as "H:MM:SS", or "M:SS" when under an hour.
pub fn format_duration(seconds: TimeDuration) -> String {
    let hh = seconds / 3600;
    let mm = (seconds % 3600) / 60;
    let ss = seconds % 60;

    if hh > 0 {
        format!("{}:{:02}:{:02}", hh, mm, ss)
    } else {
        format!("{}:{:02}", mm, ss)
    }
}

/// Render a seconds-per-km value as "M:SS/km".
pub fn format_pace(seconds_per_km: f64) -> String {
    // Round first so 359.7 reads 6:00 rather than 5:60
    let total = seconds_per_km.max(0.0).round() as u64;
    format!("{}:{:02}/km", total / 60, total % 60)
}
