//! Photo source refresh after a server-side change (e.g. rotation).

use crate::time::Timestamp;

/// Replace the query string of `src` with a cache-busting stamp.
///
/// Everything before `?` is kept verbatim, so the browser requests the same
/// resource again instead of serving its cached copy.
#[must_use]
pub fn refreshed_source(src: &str, at: Timestamp) -> String {
    let path = src.split('?').next().unwrap_or(src);
    format!("{path}?{}", at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(millis: i64) -> Timestamp {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn should_append_stamp_to_plain_source() {
        assert_eq!(
            refreshed_source("/media/photos/1.jpg", at(1_400_000_000_000)),
            "/media/photos/1.jpg?1400000000000"
        );
    }

    #[test]
    fn should_replace_previous_stamp() {
        let first = refreshed_source("/media/photos/1.jpg", at(1_000));
        let second = refreshed_source(&first, at(2_000));
        assert_eq!(second, "/media/photos/1.jpg?2000");
    }

    #[test]
    fn should_keep_path_and_change_suffix() {
        let before = "/media/photos/1.jpg?w=800";
        let after = refreshed_source(before, at(5));
        assert_ne!(before, after);
        assert_eq!(after.split('?').next(), before.split('?').next());
    }
}
