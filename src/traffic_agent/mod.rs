pub mod agent;
pub mod map_links;

pub use agent::{RouteRequest, TrafficAgent};
pub use map_links::{encode_uri_component, MapLinks};
