use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp recorded with scramble parameters.
///
/// The string form is part of the scramble seed, so it is always RFC 3339
/// with millisecond precision.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        write!(f, "{s}")
    }
}
impl std::str::FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> chrono::ParseResult<Self> {
        DateTime::from_str(s).map(Self)
    }
}
impl Timestamp {
    /// Returns the UTC timestamp for the present moment, according to the
    /// system clock, truncated to the millisecond.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(3))
    }

    /// Returns the Unix epoch, used for scrambles whose seed is chosen by
    /// hand.
    pub fn epoch() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_timestamp_string_roundtrip() {
        let t = Timestamp::now();
        assert_eq!(Ok(t), t.to_string().parse());
        assert_eq!("1970-01-01T00:00:00.000Z", Timestamp::epoch().to_string());
    }
}
