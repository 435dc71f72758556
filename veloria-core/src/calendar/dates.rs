//! Date and time-of-day helpers.
//!
//! Every parser here is total: malformed input gives `None` (or a documented
//! fallback), never a panic or an error.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Parse a strict `yyyy-mm-dd` string, rejecting calendar overflow
/// such as `2026-02-31`.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits = |range: std::ops::Range<usize>| -> Option<u32> {
        let part = &s[range];
        if part.bytes().all(|b| b.is_ascii_digit()) {
            part.parse().ok()
        } else {
            None
        }
    };

    let year = digits(0..4)?;
    let month = digits(5..7)?;
    let day = digits(8..10)?;
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `yyyy-mm-dd` -> `dd.mm.yyyy`, or `None` if the input is not a valid date.
pub fn format_dmy(iso: &str) -> Option<String> {
    parse_iso_date(iso).map(|d| d.format("%d.%m.%Y").to_string())
}

/// Loose display of an optional stored date: `—` when absent, `dd.mm.yyyy`
/// when it has three dash-separated parts, the raw string otherwise.
pub fn display_date(iso: Option<&str>) -> String {
    let Some(iso) = iso.filter(|s| !s.is_empty()) else {
        return "—".to_string();
    };
    let parts: Vec<&str> = iso.split('-').collect();
    match parts.as_slice() {
        [y, m, d] if !y.is_empty() && !m.is_empty() && !d.is_empty() => format!("{}.{}.{}", d, m, y),
        _ => iso.to_string(),
    }
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The Monday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    add_days(date, -(offset as i64))
}

pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    let shifted = if n >= 0 {
        date.checked_add_days(Days::new(n as u64))
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// First day of the month `n` months away from `date`'s month.
pub fn add_months(date: NaiveDate, n: i32) -> NaiveDate {
    let first = start_of_month(date);
    let shifted = if n >= 0 {
        first.checked_add_months(Months::new(n as u32))
    } else {
        first.checked_sub_months(Months::new(n.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() >= 5
}

/// Hour of a strict `HH:mm` string; `None` when malformed or out of range.
pub fn hour_from_hhmm(hhmm: &str) -> Option<u32> {
    split_hhmm(hhmm).map(|(h, _)| h)
}

/// Hours and minutes of a strict `HH:mm` time of day (`00:00` to `23:59`).
fn split_hhmm(hhmm: &str) -> Option<(u32, u32)> {
    let bytes = hhmm.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if !bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit) {
        return None;
    }
    let h: u32 = hhmm[..2].parse().ok()?;
    let m: u32 = hhmm[3..].parse().ok()?;
    (h <= 23 && m <= 59).then_some((h, m))
}

/// Shift an `HH:mm` time, wrapping around midnight. Malformed input is
/// returned unchanged.
pub fn add_minutes_to_hhmm(hhmm: &str, minutes: i64) -> String {
    let Some((h, m)) = split_hhmm(hhmm) else {
        return hhmm.to_string();
    };
    const DAY: i64 = 24 * 60;
    let total = (h as i64 * 60 + m as i64 + minutes).rem_euclid(DAY);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `"11:00"` -> `"11:00 - 12:00"`.
pub fn time_range_label(hhmm: &str, duration_min: i64) -> String {
    format!("{} - {}", hhmm, add_minutes_to_hhmm(hhmm, duration_min))
}

/// Uppercase the first character, leaving the rest alone.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A `?date=` style parameter: valid ISO dates are used, anything else
/// falls back to `today`.
pub fn date_from_query(param: Option<&str>, today: NaiveDate) -> NaiveDate {
    param.map(str::trim).and_then(parse_iso_date).unwrap_or(today)
}

/// `yyyy-mm-dd` -> `yyyy-mm-ddT00:00`, empty for empty input.
pub fn to_local_dt(ymd: &str) -> String {
    if ymd.is_empty() {
        String::new()
    } else {
        format!("{}T00:00", ymd)
    }
}

/// Date part of a `yyyy-mm-ddTHH:mm` string, if it is a valid date.
pub fn ymd_from_local_dt(local_dt: &str) -> Option<NaiveDate> {
    let (date, _) = local_dt.split_once('T')?;
    parse_iso_date(date)
}

/// Time part of a `yyyy-mm-ddTHH:mm` string, `"00:00"` when missing.
pub fn hhmm_from_local_dt(local_dt: &str) -> String {
    let Some((_, time)) = local_dt.split_once('T') else {
        return "00:00".to_string();
    };
    match time.get(..5) {
        Some(hhmm) if split_hhmm(hhmm).is_some() => hhmm.to_string(),
        _ => "00:00".to_string(),
    }
}
