use crate::global_variables::DISPLAY_UTC_OFFSET_SECS;
use chrono::{DateTime, Datelike, FixedOffset, Offset, TimeZone, Timelike, Utc};

/// Hour and weekday a request is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficClock {
    /// 0..=23
    pub hour: u8,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u8,
}

impl TrafficClock {
    pub fn new(hour: u8, weekday: u8) -> Self {
        Self {
            hour: hour % 24,
            weekday: weekday % 7,
        }
    }

    /// Reads hour and weekday in the display time zone.
    pub fn from_datetime<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let local = now.with_timezone(&display_offset());
        Self {
            hour: local.hour() as u8,
            weekday: local.weekday().num_days_from_sunday() as u8,
        }
    }
}

pub fn display_offset() -> FixedOffset {
    // DISPLAY_UTC_OFFSET_SECS is a compile-time constant well inside the valid range.
    FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Wall-clock label such as "5:07:42 PM" in the display time zone.
pub fn format_local_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.with_timezone(&display_offset())
        .format("%-I:%M:%S %p")
        .to_string()
}
