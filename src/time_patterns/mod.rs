pub mod clock;
pub mod patterns;

pub use clock::TrafficClock;
pub use patterns::{classify_hour, format_time, pattern_for, TimePattern, TrafficBand};
