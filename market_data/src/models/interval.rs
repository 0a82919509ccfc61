//! Bar interval supported by the kline endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Invalid interval '{0}', expected one of 1m/5m/15m/30m/1h/4h/1d/1w")]
pub struct IntervalParseError(String);

/// The time interval covered by one bar.
///
/// The variants mirror the interval strings the exchange kline API
/// accepts; [`Interval::as_str`] yields the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Interval {
    Min1,
    Min5,
    Min15,
    Min30,
    Hour1,
    Hour4,
    Day1,
    Week1,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Min1 => "1m",
            Interval::Min5 => "5m",
            Interval::Min15 => "15m",
            Interval::Min30 => "30m",
            Interval::Hour1 => "1h",
            Interval::Hour4 => "4h",
            Interval::Day1 => "1d",
            Interval::Week1 => "1w",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1m" => Ok(Interval::Min1),
            "5m" => Ok(Interval::Min5),
            "15m" => Ok(Interval::Min15),
            "30m" => Ok(Interval::Min30),
            "1h" => Ok(Interval::Hour1),
            "4h" => Ok(Interval::Hour4),
            "1d" => Ok(Interval::Day1),
            "1w" => Ok(Interval::Week1),
            other => Err(IntervalParseError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Interval {
    type Error = IntervalParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Interval> for String {
    fn from(i: Interval) -> Self {
        i.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_wire_form() {
        for s in ["1m", "5m", "15m", "30m", "1h", "4h", "1d", "1w"] {
            let interval: Interval = s.parse().unwrap();
            assert_eq!(interval.as_str(), s);
        }
    }

    #[test]
    fn rejects_unknown_interval() {
        assert!("3h".parse::<Interval>().is_err());
        assert!("".parse::<Interval>().is_err());
    }

    #[test]
    fn deserializes_from_config_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            interval: Interval,
        }
        let w: Wrapper = serde_json::from_str(r#"{"interval": "15m"}"#).unwrap();
        assert_eq!(w.interval, Interval::Min15);
    }
}
