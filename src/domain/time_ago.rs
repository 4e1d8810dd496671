use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Coarse relative age of `timestamp` as seen from `now` ("just now", "5m ago", "2h ago", "3d ago").
///
/// Timestamps in the future read as "just now".
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();

    if seconds < MINUTE {
        "just now".to_string()
    } else if seconds < HOUR {
        format!("{}m ago", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{}h ago", seconds / HOUR)
    } else {
        format!("{}d ago", seconds / DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ago(seconds: i64) -> String {
        let now = Utc::now();
        time_ago(now - Duration::seconds(seconds), now)
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(ago(0), "just now");
        assert_eq!(ago(59), "just now");
        assert_eq!(ago(60), "1m ago");
        assert_eq!(ago(3599), "59m ago");
        assert_eq!(ago(3600), "1h ago");
        assert_eq!(ago(86_399), "23h ago");
        assert_eq!(ago(86_400), "1d ago");
    }

    #[test]
    fn test_no_upper_bound() {
        assert_eq!(ago(400 * 86_400), "400d ago");
    }

    #[test]
    fn test_sub_second_precision_is_floored() {
        let now = Utc::now();
        let ts = now - Duration::milliseconds(60_999);
        assert_eq!(time_ago(ts, now), "1m ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(ago(-30), "just now");
        assert_eq!(ago(-10 * 86_400), "just now");
    }
}
