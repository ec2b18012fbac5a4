use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Timelike, Utc};

use crate::DecodeError;

/// Hour, minute and second in UTC, as sent in `hhmmss` form.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Timestamp {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Timestamp {
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Timestamp {
            hour,
            minute,
            second,
        }
    }

    pub fn now() -> Self {
        Self::from_time(&Utc::now())
    }

    pub fn from_time(time: &DateTime<Utc>) -> Self {
        Timestamp::new(time.hour() as u8, time.minute() as u8, time.second() as u8)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = DecodeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::InvalidTimestamp(s.to_owned()));
        }

        let b = s.as_bytes();
        let pair = |i: usize| (b[i] - b'0') * 10 + (b[i + 1] - b'0');
        let (hour, minute, second) = (pair(0), pair(2), pair(4));

        if hour > 23 || minute > 59 || second > 59 {
            return Err(DecodeError::InvalidTimestamp(s.to_owned()));
        }

        Ok(Timestamp::new(hour, minute, second))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_hhmmss() {
        assert_eq!(
            Timestamp::try_from("074548"),
            Ok(Timestamp::new(7, 45, 48))
        );
        assert_eq!(Timestamp::try_from("000000"), Ok(Timestamp::new(0, 0, 0)));
    }

    #[test]
    fn invalid_timestamp() {
        for s in ["07454", "0745489", "07a548", "246000", "-74548", "076100"] {
            assert_eq!(
                Timestamp::try_from(s),
                Err(DecodeError::InvalidTimestamp(s.to_owned()))
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(Timestamp::new(7, 5, 9).to_string(), "070509");
        assert_eq!(Timestamp::new(23, 59, 59).to_string(), "235959");
    }

    #[test]
    fn from_time() {
        let time = Utc.with_ymd_and_hms(2024, 4, 12, 18, 38, 4).unwrap();
        assert_eq!(Timestamp::from_time(&time), Timestamp::new(18, 38, 4));
    }
}
