//! Instant in time with millisecond precision.

use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time, stored as milliseconds since the unix epoch.
///
/// The value is always within ±8,640,000,000,000,000 ms of the epoch, the
/// range representable by a JavaScript `Date`. Constructors clamp instead of
/// failing, so every `Timestamp` is valid in every soia implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    unix_millis: i64,
}

const MAX_MILLIS: i64 = 8_640_000_000_000_000;

impl Timestamp {
    /// The unix epoch, also the default value.
    pub const EPOCH: Timestamp = Timestamp { unix_millis: 0 };
    /// Earliest representable instant.
    pub const MIN: Timestamp = Timestamp {
        unix_millis: -MAX_MILLIS,
    };
    /// Latest representable instant.
    pub const MAX: Timestamp = Timestamp {
        unix_millis: MAX_MILLIS,
    };

    /// Creates a timestamp from milliseconds since the epoch, clamping to
    /// the representable range.
    pub fn from_unix_millis(unix_millis: i64) -> Timestamp {
        Timestamp {
            unix_millis: unix_millis.clamp(-MAX_MILLIS, MAX_MILLIS),
        }
    }

    /// Milliseconds since the unix epoch.
    pub fn unix_millis(self) -> i64 {
        self.unix_millis
    }

    /// The current system time.
    pub fn now() -> Timestamp {
        let unix_millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_millis()).unwrap_or(MAX_MILLIS),
            Err(err) => -i64::try_from(err.duration().as_millis()).unwrap_or(MAX_MILLIS),
        };
        Timestamp::from_unix_millis(unix_millis)
    }
}
