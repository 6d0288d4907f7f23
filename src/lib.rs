pub mod config;
pub mod errors;
pub mod flow_analyzer;
pub mod global_variables;
pub mod shared_data;
pub mod time_patterns;
pub mod traffic_agent;
pub mod traffic_sources;

pub use config::AgentConfig;
pub use errors::{TrafficError, TrafficResult};
pub use shared_data::{AggregatedEstimate, Reading, Recommendation, TrafficReport};
pub use traffic_agent::{RouteRequest, TrafficAgent};
