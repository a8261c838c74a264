//! Scalar rendering.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use tracing::warn;

use crate::tag::TimeFormat;
use crate::value::QueryValue;

/// Options affecting how a scalar is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions<'a> {
    /// Write booleans as `1` / `0`.
    pub int_bool: bool,
    /// Time format.
    pub time: TimeFormat<'a>,
}

/// Renders a value to its canonical string.
///
/// Absent values render empty. A sequence renders as its elements joined
/// with `,`; maps, structs and custom values have no scalar form and render
/// empty.
///
/// # Example
///
/// ```
/// use quire_core::{RenderOptions, ToQuery, render};
///
/// let opts = RenderOptions { int_bool: true, ..RenderOptions::default() };
/// assert_eq!(render(&true.to_query_value(), &opts), "1");
/// assert_eq!(render(&Some(42).to_query_value(), &opts), "42");
/// assert_eq!(render(&None::<u8>.to_query_value(), &opts), "");
/// ```
#[must_use]
pub fn render(value: &QueryValue<'_>, opts: &RenderOptions<'_>) -> String {
    match value {
        QueryValue::Null(_)
        | QueryValue::Map(_)
        | QueryValue::Struct(_)
        | QueryValue::Custom(_) => String::new(),
        QueryValue::Bool(b) => render_bool(*b, opts.int_bool).to_string(),
        QueryValue::Int(n) => n.to_string(),
        QueryValue::Uint(n) => n.to_string(),
        QueryValue::F32(n) => n.to_string(),
        QueryValue::F64(n) => n.to_string(),
        QueryValue::Char(c) => c.to_string(),
        QueryValue::Str(s) => s.to_string(),
        QueryValue::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        QueryValue::Time(t) => render_time(t, opts.time),
        QueryValue::Seq(items) => items
            .iter()
            .map(|item| render(&item.to_query_value(), opts))
            .collect::<Vec<_>>()
            .join(","),
    }
}

const fn render_bool(value: bool, int: bool) -> &'static str {
    match (value, int) {
        (true, true) => "1",
        (false, true) => "0",
        (true, false) => "true",
        (false, false) => "false",
    }
}

/// The zero time: the earliest instant chrono represents.
///
/// The Unix epoch is a real instant and is not zero.
#[must_use]
pub fn is_zero_time(time: &DateTime<FixedOffset>) -> bool {
    *time == DateTime::<Utc>::MIN_UTC
}

/// Renders a time. The zero time renders empty.
///
/// An invalid layout is logged and falls back to RFC 3339.
#[must_use]
pub fn render_time(time: &DateTime<FixedOffset>, format: TimeFormat<'_>) -> String {
    if is_zero_time(time) {
        return String::new();
    }

    let nanos = i128::from(time.timestamp()) * 1_000_000_000
        + i128::from(time.timestamp_subsec_nanos());

    match format {
        TimeFormat::Unix => time.timestamp().to_string(),
        TimeFormat::UnixMilli => (nanos / 1_000_000).to_string(),
        TimeFormat::UnixNano => nanos.to_string(),
        TimeFormat::Layout(layout) => {
            let mut out = String::new();
            if write!(out, "{}", time.format(layout)).is_ok() {
                out
            } else {
                warn!(layout, "invalid time layout, using RFC 3339");
                rfc3339(time)
            }
        }
        TimeFormat::Rfc3339 => rfc3339(time),
    }
}

fn rfc3339(time: &DateTime<FixedOffset>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
