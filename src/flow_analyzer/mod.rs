pub mod recommendations;
pub mod traffic_analyzer;

pub use recommendations::generate_optimal_travel_times;
pub use traffic_analyzer::{
    calculate_confidence_level, classify_travel_time, combine_traffic_sources,
    weighted_travel_time, SourceReadings,
};
