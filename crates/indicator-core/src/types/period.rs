//! Lookback periods for historical requests.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// How far back a historical request reaches from its end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Period {
    /// Shortest request; still spans enough calendar days for 20 trading days
    #[serde(rename = "1d")]
    Day1,
    /// One month
    #[serde(rename = "1mo")]
    #[default]
    Month1,
    /// Three months
    #[serde(rename = "3mo")]
    Month3,
    /// Six months
    #[serde(rename = "6mo")]
    Month6,
    /// One year
    #[serde(rename = "1y")]
    Year1,
    /// Two years
    #[serde(rename = "2y")]
    Year2,
    /// Five years
    #[serde(rename = "5y")]
    Year5,
}

impl Period {
    /// Calendar days covered by the period.
    pub fn lookback_days(&self) -> i64 {
        match self {
            Period::Day1 => 40,
            Period::Month1 => 30,
            Period::Month3 => 90,
            Period::Month6 => 180,
            Period::Year1 => 365,
            Period::Year2 => 730,
            Period::Year5 => 1825,
        }
    }

    /// First date of a range ending at `end`.
    pub fn start_from(&self, end: NaiveDate) -> NaiveDate {
        end - Duration::days(self.lookback_days())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::Day1 => "1d",
            Period::Month1 => "1mo",
            Period::Month3 => "3mo",
            Period::Month6 => "6mo",
            Period::Year1 => "1y",
            Period::Year2 => "2y",
            Period::Year5 => "5y",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Period {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1d" => Ok(Period::Day1),
            "1mo" => Ok(Period::Month1),
            "3mo" => Ok(Period::Month3),
            "6mo" => Ok(Period::Month6),
            "1y" => Ok(Period::Year1),
            "2y" => Ok(Period::Year2),
            "5y" => Ok(Period::Year5),
            _ => Err(DataError::InvalidPeriod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookback_days() {
        assert_eq!(Period::Day1.lookback_days(), 40);
        assert_eq!(Period::Month1.lookback_days(), 30);
        assert_eq!(Period::Year5.lookback_days(), 1825);
    }

    #[test]
    fn test_start_from() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(
            Period::Month1.start_from(end),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_period_parse_and_display() {
        let periods = [
            Period::Day1,
            Period::Month1,
            Period::Month3,
            Period::Month6,
            Period::Year1,
            Period::Year2,
            Period::Year5,
        ];
        for period in periods {
            assert_eq!(Period::from_str(&period.to_string()).unwrap(), period);
        }
        assert_eq!(Period::from_str("6MO").unwrap(), Period::Month6);
        assert!(matches!(
            Period::from_str("10y"),
            Err(DataError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_period_serde_labels() {
        let json = serde_json::to_string(&Period::Month3).unwrap();
        assert_eq!(json, "\"3mo\"");
        let parsed: Period = serde_json::from_str("\"2y\"").unwrap();
        assert_eq!(parsed, Period::Year2);
    }
}
