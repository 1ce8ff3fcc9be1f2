use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

/// Fallback window applied when a duration spec fails to parse.
pub fn default_window() -> Duration {
    Duration::days(7)
}

/// Parse a duration spec of the form `<integer><unit>`, unit in {d, h, m}.
///
/// Returns `None` for anything else (`"garbage"`, `"7x"`, `"d7"`, `"+7d"`).
pub fn parse_window(spec: &str) -> Option<Duration> {
    if !spec.is_ascii() || spec.len() < 2 {
        return None;
    }

    let (value, unit) = spec.split_at(spec.len() - 1);
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = value.parse().ok()?;

    match unit {
        "d" => Some(Duration::days(value)),
        "h" => Some(Duration::hours(value)),
        "m" => Some(Duration::minutes(value)),
        _ => None,
    }
}

/// Parse a duration spec, falling back to 7 days on a malformed spec.
///
/// Malformed configuration degrades to the default instead of failing
/// startup. Callers that want to surface the problem should use
/// [`parse_window`] and log on `None`.
pub fn parse_window_or_default(spec: &str) -> Duration {
    parse_window(spec).unwrap_or_else(default_window)
}

/// Expiry timestamp for a token issued now with the given window spec.
pub fn compute_expiry(spec: &str) -> DateTime<Utc> {
    Utc::now() + parse_window_or_default(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_window("7d"), Some(Duration::days(7)));
        assert_eq!(parse_window("30d"), Some(Duration::days(30)));
    }

    #[test]
    fn test_parse_hours_and_minutes() {
        assert_eq!(parse_window("24h"), Some(Duration::hours(24)));
        assert_eq!(parse_window("15m"), Some(Duration::minutes(15)));
    }

    #[test]
    fn test_parse_rejects_malformed_specs() {
        assert_eq!(parse_window("garbage"), None);
        assert_eq!(parse_window("7x"), None);
        assert_eq!(parse_window("d7"), None);
        assert_eq!(parse_window("+7d"), None);
        assert_eq!(parse_window("-7d"), None);
        assert_eq!(parse_window("d"), None);
        assert_eq!(parse_window(""), None);
    }

    #[test]
    fn test_malformed_spec_falls_back_to_seven_days() {
        assert_eq!(parse_window_or_default("garbage"), Duration::days(7));
        assert_eq!(parse_window_or_default("24h"), Duration::hours(24));
    }

    #[test]
    fn test_compute_expiry() {
        let now = Utc::now();

        let expiry = compute_expiry("7d");
        assert!((expiry - (now + Duration::days(7))).num_seconds().abs() <= 1);

        let expiry = compute_expiry("24h");
        assert!((expiry - (now + Duration::hours(24))).num_seconds().abs() <= 1);

        // Documented fallback: unparseable specs behave like "7d"
        let expiry = compute_expiry("garbage");
        assert!((expiry - (now + Duration::days(7))).num_seconds().abs() <= 1);
    }
}
