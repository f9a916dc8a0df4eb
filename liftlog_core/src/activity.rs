//! Activity log loading.
//!
//! An activity log is a plain text file with one training day per line,
//! either a bare `YYYY-MM-DD` date or an RFC 3339 timestamp exported from
//! the set table. Blank lines and `#` comments are skipped.

use crate::{ActivityRecord, Error, Result};
use chrono::{DateTime, NaiveDate};
use std::path::Path;

/// Parse a single log entry
pub fn parse_activity(value: &str) -> Option<ActivityRecord> {
    let value = value.trim();
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(day.into());
    }
    DateTime::parse_from_rfc3339(value).ok().map(ActivityRecord::from)
}

/// Parse every entry of an activity log
///
/// Fails on the first unparseable line, naming its 1-based line number.
pub fn parse_activity_log(contents: &str) -> Result<Vec<ActivityRecord>> {
    let mut records = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_activity(line) {
            Some(record) => records.push(record),
            None => {
                return Err(Error::InvalidDate {
                    line: idx + 1,
                    value: line.to_string(),
                })
            }
        }
    }

    tracing::debug!("Parsed {} activity entries", records.len());
    Ok(records)
}

/// Load an activity log from disk
pub fn load_activity_log(path: &Path) -> Result<Vec<ActivityRecord>> {
    let contents = std::fs::read_to_string(path)?;
    let records = parse_activity_log(&contents)?;
    tracing::info!("Loaded {} activity entries from {:?}", records.len(), path);
    Ok(records)
}
