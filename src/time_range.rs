//! Time-range expressions for the `log` command
//!
//! Accepted forms, all relative to "today" (the date of evaluation):
//! - empty: everything since the program started
//! - `13`: the whole hour bucket 13:00:00 to 13:59:59
//! - `8-21`, `08:00-21:00`: from the first time to the second, inclusive

use crate::error::{Result, ShellError};
use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Parse a single time token: a bare hour in `0..24` or an `HH:MM` literal.
///
/// `HH:MM:SS` is accepted as well. Surrounding whitespace is ignored.
pub fn parse_time_token(s: &str) -> Result<NaiveTime> {
    let s = s.trim();

    if let Ok(hour) = s.parse::<u32>() {
        return NaiveTime::from_hms_opt(hour, 0, 0)
            .filter(|_| hour < 24)
            .ok_or_else(|| ShellError::UnparsableTime(s.to_string()));
    }

    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| ShellError::UnparsableTime(s.to_string()))
}

/// Resolve the text following `log` into an inclusive `(from, to)` window.
///
/// No ordering is enforced: `21-8` yields a window whose end precedes its
/// start, which simply matches nothing.
pub fn parse_range(
    arg: &str,
    program_epoch: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Ok((program_epoch, now));
    }

    let today = now.date();

    if let Some((first, second)) = arg.split_once('-') {
        let from = parse_time_token(first)?;
        let to = parse_time_token(second)?;
        return Ok((today.and_time(from), today.and_time(to)));
    }

    let from = today.and_time(parse_time_token(arg)?);
    let to = from + Duration::hours(1) - Duration::seconds(1);
    Ok((from, to))
}
