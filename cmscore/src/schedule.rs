use chrono::{DateTime, SecondsFormat, Utc};

/// Whether `at` is strictly later than `now`; a publish time equal to
/// the current instant is not in the future.
pub fn is_future(at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    at > now
}

/// The ISO-8601 form of a publish time as exchanged with the
/// content-service.
pub fn to_iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod test {
    use chrono::{Duration, TimeZone, Utc};
    use super::*;

    #[test]
    fn strictly_future() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        assert!(is_future(now + Duration::hours(1), now));
        assert!(is_future(now + Duration::milliseconds(1), now));
        assert!(!is_future(now, now));
        assert!(!is_future(now - Duration::seconds(1), now));
    }

    #[test]
    fn iso8601() {
        let at = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(to_iso8601(at), "2030-01-02T03:04:05Z");
        assert_eq!(
            to_iso8601(at + Duration::milliseconds(250)),
            "2030-01-02T03:04:05.250Z",
        );
    }
}
