// Source names as they appear on a Reading
pub const SOURCE_MAP_SERVICE: &str = "Google Maps";
pub const SOURCE_CROWD_SOURCED: &str = "Waze";
pub const SOURCE_SENSOR_FEED: &str = "Traffic Sensors";

// Labels listed on a live report, in fetch order
pub const DATA_SOURCE_LABELS: [&str; 3] = [
    "Google Maps API",
    "Waze Traffic Data",
    "Local Traffic Sensors",
];

// Per-source reliability weights
pub const RELIABILITY_MAP_SERVICE: f64 = 0.9;
pub const RELIABILITY_CROWD_SOURCED: f64 = 0.85;
pub const RELIABILITY_SENSOR_FEED: f64 = 0.8;

// Hour sets shared by the synthetic sources
pub const RUSH_HOURS: [u8; 7] = [7, 8, 9, 17, 18, 19, 20];
pub const LUNCH_HOURS: [u8; 3] = [13, 14, 15];

/// Day indices (0 = Sunday) treated as the weekend: Friday and Saturday.
pub const WEEKEND_DAYS: [u8; 2] = [5, 6];
/// Day indices whose following day is scored with the weekend pattern.
/// Kept separate from `WEEKEND_DAYS` on purpose; do not derive one from the other.
pub const TOMORROW_WEEKEND_DAYS: [u8; 2] = [4, 5];

// Simulated source latencies (milliseconds)
pub const LATENCY_MAP_SERVICE_MS: u64 = 300;
pub const LATENCY_CROWD_SOURCED_MS: u64 = 500;
pub const LATENCY_SENSOR_FEED_MS: u64 = 200;
pub const SOURCE_TIMEOUT_MS: u64 = 2_000;

// Fallback report
pub const FALLBACK_CONDITION: &str = "Unable to fetch live data";
pub const FALLBACK_TRAVEL_TIME: &str = "20-30 minutes (estimated)";
pub const FALLBACK_ADVICE: &str = "Check Google Maps or Waze for real-time updates";
pub const FALLBACK_DATA_SOURCE: &str = "Fallback estimation";
pub const FALLBACK_CONFIDENCE: u8 = 50;

pub const INPUT_VALIDATION_MESSAGE: &str = "Please enter both starting point and destination";

/// Quick-fill list. The first five are offered as starting points, the rest as destinations.
pub const POPULAR_LOCATIONS: [&str; 10] = [
    "King Abdulaziz International Airport",
    "Corniche Road",
    "Red Sea Mall",
    "Al-Balad Historic District",
    "King Fahd Road",
    "Tahlia Street",
    "Jeddah Islamic Port",
    "King Abdullah Sports City",
    "Mall of Arabia",
    "Al Hamra Business District",
];

/// Asia/Riyadh has no DST, a fixed offset is exact.
pub const DISPLAY_UTC_OFFSET_SECS: i32 = 3 * 3600;

// Outbound map links
pub const DIRECTIONS_URL_BASE: &str = "https://www.google.com/maps/dir/";
pub const NAVIGATE_URL_BASE: &str = "https://www.waze.com/ul?navigate=yes";
