use crate::core::time::TimePoint;

pub fn parse_i64_input(value: &str, fallback: i64) -> i64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<i64>().unwrap_or(fallback)
}

/// Reads a range input's value, which carries seconds since the epoch.
/// Fractional values from the webview are truncated.
pub fn parse_time_input(value: &str, fallback: TimePoint) -> TimePoint {
    let trimmed = value.trim();
    if let Ok(seconds) = trimmed.parse::<i64>() {
        return TimePoint(seconds);
    }
    match trimmed.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => TimePoint(seconds as i64),
        _ => TimePoint(parse_i64_input(trimmed, fallback.seconds())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i64_input_falls_back() {
        assert_eq!(parse_i64_input(" 42 ", 0), 42);
        assert_eq!(parse_i64_input("", 7), 7);
        assert_eq!(parse_i64_input("abc", 7), 7);
    }

    #[test]
    fn test_parse_time_input_accepts_negative_and_fractional() {
        let fallback = TimePoint(5);
        assert_eq!(parse_time_input("-5364662400", fallback), TimePoint(-5_364_662_400));
        assert_eq!(parse_time_input("100.9", fallback), TimePoint(100));
        assert_eq!(parse_time_input("NaN", fallback), fallback);
        assert_eq!(parse_time_input("", fallback), fallback);
    }
}
