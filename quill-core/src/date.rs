use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;

pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Format a front matter `date` as `M/D/YY`, e.g. `1/10/25`.
///
/// Missing or unparseable dates display as [`UNKNOWN_DATE`].
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return UNKNOWN_DATE.to_string();
    };

    match parse_date(raw) {
        Some(date) => date.format("%-m/%-d/%y").to_string(),
        None => {
            debug!("Unrecognised date {raw:?}, showing {UNKNOWN_DATE:?}");
            UNKNOWN_DATE.to_string()
        }
    }
}

/// Calendar dates writers commonly put in front matter. Month names match
/// in full or abbreviated, in any case.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];

/// Accepts any of [`DATE_FORMATS`], `YYYY-MM-DD HH:MM[:SS]`, or a full
/// RFC 3339 timestamp. Timestamps keep their own calendar day.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}
