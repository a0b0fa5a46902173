//! Timestamp rendering for the `x-amz-date` header and the credential scope.

use chrono::{DateTime, Utc};

const LONG_DATETIME_FMT: &str = "%Y%m%dT%H%M%SZ";
const SHORT_DATE_FMT: &str = "%Y%m%d";

/// Both renderings of a single captured instant.
///
/// Build one per request from one clock read. Formatting the long and
/// short forms from two different reads can straddle midnight and yield a
/// scope date that disagrees with `x-amz-date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningTime {
    /// `YYYYMMDDTHHMMSSZ`
    pub amz_date: String,
    /// `YYYYMMDD`
    pub date_stamp: String,
}

impl SigningTime {
    pub fn new(date_time: &DateTime<Utc>) -> Self {
        Self {
            amz_date: date_time.format(LONG_DATETIME_FMT).to_string(),
            date_stamp: date_time.format(SHORT_DATE_FMT).to_string(),
        }
    }
}

impl From<DateTime<Utc>> for SigningTime {
    fn from(date_time: DateTime<Utc>) -> Self {
        Self::new(&date_time)
    }
}
