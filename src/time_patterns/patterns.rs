use serde::Serialize;

/// Traffic intensity assigned to an hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficBand {
    VeryLight,
    Light,
    Moderate,
    Heavy,
}

/// A partition of hours 0..=23 into the four bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePattern {
    pub very_light: &'static [u8],
    pub light: &'static [u8],
    pub moderate: &'static [u8],
    pub heavy: &'static [u8],
}

pub const WEEKDAY_PATTERN: TimePattern = TimePattern {
    very_light: &[0, 1, 2, 3, 4, 5, 22, 23],
    light: &[6, 21],
    moderate: &[10, 11, 12, 16],
    heavy: &[7, 8, 9, 13, 14, 15, 17, 18, 19, 20],
};

// Shopping and leisure push the heavy band into the afternoon.
pub const WEEKEND_PATTERN: TimePattern = TimePattern {
    very_light: &[0, 1, 2, 3, 4, 5, 6, 7],
    light: &[8, 9, 23],
    moderate: &[10, 11, 12, 21, 22],
    heavy: &[13, 14, 15, 16, 17, 18, 19, 20],
};

impl TimePattern {
    pub fn hours(&self, band: TrafficBand) -> &'static [u8] {
        match band {
            TrafficBand::VeryLight => self.very_light,
            TrafficBand::Light => self.light,
            TrafficBand::Moderate => self.moderate,
            TrafficBand::Heavy => self.heavy,
        }
    }

    /// Band for `hour`. Hours outside every list count as moderate.
    pub fn classify(&self, hour: u8) -> TrafficBand {
        if self.very_light.contains(&hour) {
            TrafficBand::VeryLight
        } else if self.light.contains(&hour) {
            TrafficBand::Light
        } else if self.heavy.contains(&hour) {
            TrafficBand::Heavy
        } else {
            TrafficBand::Moderate
        }
    }

    /// Very-light and light hours merged in ascending order.
    pub fn light_hours_sorted(&self) -> Vec<u8> {
        let mut hours: Vec<u8> = self
            .very_light
            .iter()
            .chain(self.light.iter())
            .copied()
            .collect();
        hours.sort_unstable();
        hours
    }

    /// First light hour after `hour`, wrapping to the earliest one of the day.
    pub fn next_light_hour(&self, hour: u8) -> Option<u8> {
        let hours = self.light_hours_sorted();
        hours
            .iter()
            .copied()
            .find(|&h| h > hour)
            .or_else(|| hours.first().copied())
    }
}

pub fn pattern_for(is_weekend: bool) -> &'static TimePattern {
    if is_weekend {
        &WEEKEND_PATTERN
    } else {
        &WEEKDAY_PATTERN
    }
}

pub fn classify_hour(hour: u8, is_weekend: bool) -> TrafficBand {
    pattern_for(is_weekend).classify(hour)
}

/// 12-hour clock label for a whole hour: 0 -> "12:00 AM", 15 -> "3:00 PM".
pub fn format_time(hour: u8) -> String {
    match hour {
        0 => "12:00 AM".to_string(),
        1..=11 => format!("{}:00 AM", hour),
        12 => "12:00 PM".to_string(),
        _ => format!("{}:00 PM", hour - 12),
    }
}
