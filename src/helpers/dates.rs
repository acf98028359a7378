//! Date parsing.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use super::value::{Value, arg};

pub const DEFAULT_DATE_FORMAT: &str = "dmy";

static DATE_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ :\-/]").expect("valid date separator regex"));

/// Parses a delimited date with optional time, e.g. `"15/04/2001 13:45"`.
///
/// `format` gives the order of the first three fields with `d`, `m` and `y`.
/// Fields after the third are hour, minute, second and millisecond; an empty
/// time field reads as zero. Returns
/// `None` unless year, month and day form that exact calendar date; years
/// below 100 are rejected.
pub fn try_parse_date(candidate: &str, format: &str) -> Option<NaiveDateTime> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    let fields: Vec<&str> = DATE_SEPARATOR_RE.split(candidate).collect();
    let (date_fields, time_fields) = fields.split_at(fields.len().min(3));

    let field = |part: char| -> Option<i64> {
        let idx = format.chars().enumerate().filter(|(_, c)| *c == part).last()?.0;
        date_fields.get(idx)?.parse().ok()
    };
    let (year, month, day) = (field('y')?, field('m')?, field('d')?);
    if year < 100 {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?;

    if time_fields.len() > 4 {
        return None;
    }
    let time: Vec<u32> = time_fields
        .iter()
        .map(|t| if t.is_empty() { Some(0) } else { t.parse().ok() })
        .collect::<Option<_>>()?;
    let at = |i: usize| time.get(i).copied().unwrap_or(0);

    date.and_hms_milli_opt(at(0), at(1), at(2), at(3))
}

pub mod invoke {
    use super::*;

    pub fn try_parse_date(args: &mut [Value]) -> Value {
        let candidate = arg(args, 0);
        if !candidate.truthy() {
            return Value::Null;
        }
        Value::from(super::try_parse_date(
            &candidate.str_or(""),
            &arg(args, 1).str_or(DEFAULT_DATE_FORMAT),
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_day_month_year() {
        let date = try_parse_date("15/04/2001", "dmy").expect("valid date");
        assert_eq!((date.year(), date.month(), date.day()), (2001, 4, 15));
    }

    #[test]
    fn parses_time_fields() {
        let date = try_parse_date("04/03/1945 01:43", "mdy").expect("valid date");
        assert_eq!((date.year(), date.month(), date.day()), (1945, 4, 3));
        assert_eq!((date.hour(), date.minute(), date.second()), (1, 43, 0));
    }

    #[test]
    fn empty_time_fields_read_as_zero() {
        let date = try_parse_date("15/04/2001 10:", "dmy").expect("valid date");
        assert_eq!((date.day(), date.hour(), date.minute()), (15, 10, 0));
        let date = try_parse_date("15/04/2001 10::30", "dmy").expect("valid date");
        assert_eq!((date.hour(), date.minute(), date.second()), (10, 0, 30));
    }

    #[test]
    fn parses_iso_order() {
        let date = try_parse_date("2015-07-02", "ymd").expect("valid date");
        assert_eq!((date.year(), date.month(), date.day()), (2015, 7, 2));
    }

    #[test]
    fn rejects_fields_that_do_not_round_trip() {
        assert_eq!(try_parse_date("04/03/1945", "ymd"), None);
        assert_eq!(try_parse_date("31/02/2001", "dmy"), None);
        assert_eq!(try_parse_date("15/13/2001", "dmy"), None);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(try_parse_date("", "dmy"), None);
        assert_eq!(try_parse_date("15/april/2001", "dmy"), None);
        assert_eq!(try_parse_date("15/04/2001", "dm"), None);
        assert_eq!(try_parse_date("15/04/2001 25:00", "dmy"), None);
    }
}
