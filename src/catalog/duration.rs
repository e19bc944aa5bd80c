//! Time span parsing and ISO 8601 formatting for track durations.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serializer;
use std::time::Duration;

lazy_static! {
    static ref ISO_8601_DURATION: Regex = Regex::new(
        r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?)?$"
    )
    .unwrap();
    static ref CLOCK_DURATION: Regex =
        Regex::new(r"^(?:(\d+):)?(\d{1,2}):(\d{1,2}(?:\.\d+)?)$").unwrap();
}

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Parses either an ISO 8601 duration (`PT3M45S`, `P1DT2H`) or a clock
/// string (`00:03:45`, `3:45`, `01:02:03.5`).
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    parse_iso_8601(value).or_else(|| parse_clock(value))
}

fn parse_iso_8601(value: &str) -> Option<Duration> {
    let captures = ISO_8601_DURATION.captures(value)?;
    // "P" alone, or a dangling "T", carries no component.
    if captures.iter().skip(1).all(|c| c.is_none()) || value.ends_with('T') {
        return None;
    }
    let whole = |index: usize| -> Option<u64> {
        match captures.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };
    let whole_secs = whole(1)?
        .checked_mul(SECONDS_PER_DAY)?
        .checked_add(whole(2)?.checked_mul(SECONDS_PER_HOUR)?)?
        .checked_add(whole(3)?.checked_mul(SECONDS_PER_MINUTE)?)?;
    let seconds = match captures.get(4) {
        Some(m) => Duration::try_from_secs_f64(m.as_str().parse().ok()?).ok()?,
        None => Duration::ZERO,
    };
    Duration::from_secs(whole_secs).checked_add(seconds)
}

fn parse_clock(value: &str) -> Option<Duration> {
    let captures = CLOCK_DURATION.captures(value)?;
    let hours: u64 = match captures.get(1) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let minutes: u64 = captures.get(2)?.as_str().parse().ok()?;
    let seconds: f64 = captures.get(3)?.as_str().parse().ok()?;
    if minutes >= 60 && captures.get(1).is_some() {
        return None;
    }
    if seconds >= 60.0 {
        return None;
    }
    let whole_secs = hours
        .checked_mul(SECONDS_PER_HOUR)?
        .checked_add(minutes * SECONDS_PER_MINUTE)?;
    Duration::from_secs(whole_secs).checked_add(Duration::try_from_secs_f64(seconds).ok()?)
}

/// Formats a duration the way it goes over the wire, e.g. `PT3M45S`.
pub fn format_iso_8601(duration: &Duration) -> String {
    let total = duration.as_secs();
    let nanos = duration.subsec_nanos();
    if total == 0 && nanos == 0 {
        return "PT0S".to_owned();
    }

    let days = total / SECONDS_PER_DAY;
    let hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;

    let mut out = String::from("P");
    if days > 0 {
        out.push_str(&format!("{}D", days));
    }
    if hours == 0 && minutes == 0 && seconds == 0 && nanos == 0 {
        return out;
    }
    out.push('T');
    if hours > 0 {
        out.push_str(&format!("{}H", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}M", minutes));
    }
    if nanos > 0 {
        let fraction = format!("{:09}", nanos);
        out.push_str(&format!("{}.{}S", seconds, fraction.trim_end_matches('0')));
    } else if seconds > 0 {
        out.push_str(&format!("{}S", seconds));
    }
    out
}

pub(crate) fn serialize_optional<S>(
    duration: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match duration {
        Some(d) => serializer.serialize_str(&format_iso_8601(d)),
        None => serializer.serialize_none(),
    }
}
