//! # XML Schema Dates
//!
//! ISM date attributes are typed `xs:date`, but markup in the wild carries
//! the whole family of Gregorian lexical forms. `XsDate` accepts four of
//! them so a syntactically valid but wrongly typed value can be reported
//! separately from garbage:
//!
//! | Subtype | Lexical form |
//! |---------|--------------|
//! | `gYear` | `YYYY` |
//! | `gYearMonth` | `YYYY-MM` |
//! | `date` | `YYYY-MM-DD` |
//! | `dateTime` | `YYYY-MM-DDThh:mm:ss[.fff]` |
//!
//! Every form takes an optional timezone suffix (`Z` or `±hh:mm`).
//! Calendar checks (month range, days in month, leap years) are delegated
//! to chrono.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// The string is not any supported XML Schema Gregorian form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid XML Schema date: {0:?}")]
pub struct InvalidDate(pub String);

/// Which XML Schema type a parsed value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XsDateKind {
    GYear,
    GYearMonth,
    Date,
    DateTime,
}

impl XsDateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GYear => "gYear",
            Self::GYearMonth => "gYearMonth",
            Self::Date => "date",
            Self::DateTime => "dateTime",
        }
    }
}

/// Timezone suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Utc,
    Offset(FixedOffset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Value {
    Year(i32),
    YearMonth(i32, u32),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

/// A parsed XML Schema Gregorian value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XsDate {
    value: Value,
    zone: Option<Zone>,
}

impl XsDate {
    /// Parses any supported lexical form.
    pub fn parse(input: &str) -> Result<Self, InvalidDate> {
        let invalid = || InvalidDate(input.to_string());
        let trimmed = input.trim();
        let (body, zone) = split_zone(trimmed).ok_or_else(invalid)?;

        let value = if let Some((date, time)) = body.split_once('T') {
            if !is_date_shape(date) || !is_time_shape(time) {
                return Err(invalid());
            }
            let datetime = NaiveDateTime::parse_from_str(body, "%Y-%m-%dT%H:%M:%S%.f")
                .map_err(|_| invalid())?;
            Value::DateTime(datetime)
        } else if is_date_shape(body) {
            Value::Date(NaiveDate::parse_from_str(body, "%Y-%m-%d").map_err(|_| invalid())?)
        } else if body.len() == 7 && body.as_bytes()[4] == b'-' && all_digits(&body[..4]) && all_digits(&body[5..]) {
            let year = body[..4].parse().map_err(|_| invalid())?;
            let month: u32 = body[5..].parse().map_err(|_| invalid())?;
            if !(1..=12).contains(&month) {
                return Err(invalid());
            }
            Value::YearMonth(year, month)
        } else if body.len() == 4 && all_digits(body) {
            Value::Year(body.parse().map_err(|_| invalid())?)
        } else {
            return Err(invalid());
        };

        Ok(Self { value, zone })
    }

    /// Convenience constructor for a plain `xs:date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            value: Value::Date(date),
            zone: None,
        }
    }

    pub fn kind(&self) -> XsDateKind {
        match self.value {
            Value::Year(_) => XsDateKind::GYear,
            Value::YearMonth(..) => XsDateKind::GYearMonth,
            Value::Date(_) => XsDateKind::Date,
            Value::DateTime(_) => XsDateKind::DateTime,
        }
    }

    pub fn is_date(&self) -> bool {
        self.kind() == XsDateKind::Date
    }

    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }

    /// The calendar date, for `date` and `dateTime` values.
    pub fn date(&self) -> Option<NaiveDate> {
        match self.value {
            Value::Date(d) => Some(d),
            Value::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }

    /// Canonical lexical form.
    pub fn to_xml_format(&self) -> String {
        let mut out = match self.value {
            Value::Year(y) => format!("{y:04}"),
            Value::YearMonth(y, m) => format!("{y:04}-{m:02}"),
            Value::Date(d) => format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day()),
            Value::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        };
        match self.zone {
            Some(Zone::Utc) => out.push('Z'),
            Some(Zone::Offset(offset)) => out.push_str(&format_offset(offset)),
            None => {}
        }
        out
    }
}

impl fmt::Display for XsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml_format())
    }
}

impl FromStr for XsDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ---------------------------------------------------------------------------
// Lexical helpers
// ---------------------------------------------------------------------------

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `DDDD-DD-DD`
fn is_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && all_digits(&s[..4])
        && all_digits(&s[5..7])
        && all_digits(&s[8..])
}

/// `DD:DD:DD` optionally followed by `.D+`
fn is_time_shape(s: &str) -> bool {
    let (hms, fraction) = match s.split_once('.') {
        Some((hms, fraction)) => (hms, Some(fraction)),
        None => (s, None),
    };
    let b = hms.as_bytes();
    let hms_ok = b.len() == 8
        && b[2] == b':'
        && b[5] == b':'
        && all_digits(&hms[..2])
        && all_digits(&hms[3..5])
        && all_digits(&hms[6..]);
    hms_ok && fraction.map_or(true, all_digits)
}

/// Splits an optional timezone suffix. Returns `None` for a malformed
/// offset.
fn split_zone(s: &str) -> Option<(&str, Option<Zone>)> {
    if let Some(body) = s.strip_suffix('Z') {
        return Some((body, Some(Zone::Utc)));
    }
    let b = s.as_bytes();
    if b.len() > 6 && (b[b.len() - 6] == b'+' || b[b.len() - 6] == b'-') && b[b.len() - 3] == b':' {
        let (body, suffix) = s.split_at(s.len() - 6);
        let hours: i32 = suffix[1..3].parse().ok()?;
        let minutes: i32 = suffix[4..].parse().ok()?;
        if !all_digits(&suffix[1..3]) || !all_digits(&suffix[4..]) || hours > 14 || minutes > 59 {
            return None;
        }
        let seconds = (hours * 60 + minutes) * 60;
        let offset = if suffix.starts_with('-') {
            FixedOffset::west_opt(seconds)
        } else {
            FixedOffset::east_opt(seconds)
        }?;
        return Some((body, Some(Zone::Offset(offset))));
    }
    Some((s, None))
}

fn format_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}
