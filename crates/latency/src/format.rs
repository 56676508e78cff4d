//! Text rendering for timestamps and latency deltas in measurement lines.

use std::fmt::Display;

use chrono::TimeDelta;

use crate::clock::Timestamp;

/// `HH:MM:SS.mmm`, local time.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

pub fn format_timestamp(at: &Timestamp) -> impl Display + '_ {
    at.format(TIMESTAMP_FORMAT)
}

/// Renders a signed delta in the compact unit form (`10ms`, `1.5s`, `850µs`).
///
/// Zero prints as `0s`; negative deltas, which happen when a byte was stamped
/// before the frame loop saw the commit, keep a leading `-`.
pub fn format_latency(delta: TimeDelta) -> String {
    if delta == TimeDelta::zero() {
        return "0s".to_string();
    }
    let (sign, magnitude) = if delta < TimeDelta::zero() {
        ("-", -delta)
    } else {
        ("", delta)
    };
    match magnitude.to_std() {
        Ok(duration) => format!("{sign}{duration:?}"),
        Err(_) => format!("{sign}{}ms", magnitude.num_milliseconds()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn formats_common_latencies() {
        assert_eq!(format_latency(TimeDelta::milliseconds(10)), "10ms");
        assert_eq!(format_latency(TimeDelta::microseconds(10_500)), "10.5ms");
        assert_eq!(format_latency(TimeDelta::microseconds(850)), "850µs");
        assert_eq!(format_latency(TimeDelta::milliseconds(1_200)), "1.2s");
    }

    #[test]
    fn zero_and_negative_deltas() {
        assert_eq!(format_latency(TimeDelta::zero()), "0s");
        assert_eq!(format_latency(TimeDelta::milliseconds(-3)), "-3ms");
    }

    #[test]
    fn timestamps_render_with_milliseconds() {
        let at = Local
            .with_ymd_and_hms(2024, 3, 1, 9, 5, 7)
            .single()
            .expect("unambiguous local time")
            + TimeDelta::milliseconds(42);
        assert_eq!(format_timestamp(&at).to_string(), "09:05:07.042");
    }
}
