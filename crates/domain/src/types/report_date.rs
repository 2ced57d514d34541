//! The business date a digest run reports on.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;
use crate::errors::SalesDigestError;

/// Calendar date rendered and parsed as `DD/MM/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in the host's local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for ReportDate {
    type Err = SalesDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map(Self).map_err(|e| {
            SalesDigestError::InvalidInput(format!("expected a DD/MM/YYYY date, got '{s}': {e}"))
        })
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders_day_first() {
        let date: ReportDate = "05/03/2026".parse().unwrap();

        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        assert_eq!(date.to_string(), "05/03/2026");
    }

    #[test]
    fn rejects_iso_dates() {
        let err = "2026-03-05".parse::<ReportDate>().unwrap_err();
        assert!(matches!(err, SalesDigestError::InvalidInput(_)));
    }
}
