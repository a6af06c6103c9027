//! Query interval selector

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Aggregation interval of a statistics query.
///
/// Day and month queries come back as a histogram, isoweek and year queries
/// as a single summary block. Anything else is treated as a plain histogram.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Interval {
    Day,
    IsoWeek,
    Month,
    Year,
    /// Unrecognized interval, kept verbatim
    Other(String),
}

impl Interval {
    pub fn as_str(&self) -> &str {
        match self {
            Interval::Day => "day",
            Interval::IsoWeek => "isoweek",
            Interval::Month => "month",
            Interval::Year => "year",
            Interval::Other(name) => name,
        }
    }

    /// Whether the raw payload for this interval is a summary block
    pub fn is_summary(&self) -> bool {
        matches!(self, Interval::IsoWeek | Interval::Year)
    }
}

impl From<&str> for Interval {
    fn from(value: &str) -> Self {
        match value {
            "day" => Interval::Day,
            "isoweek" => Interval::IsoWeek,
            "month" => Interval::Month,
            "year" => Interval::Year,
            other => Interval::Other(other.to_string()),
        }
    }
}

impl From<String> for Interval {
    fn from(value: String) -> Self {
        Interval::from(value.as_str())
    }
}

impl From<Interval> for String {
    fn from(value: Interval) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Interval {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Interval::from(s))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
