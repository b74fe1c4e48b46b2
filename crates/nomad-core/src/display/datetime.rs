//! Timestamp display in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Displays a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ` in the system
/// timezone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
