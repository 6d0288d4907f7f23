// src/shared_data.rs

use crate::global_variables::{
    FALLBACK_ADVICE, FALLBACK_CONFIDENCE, FALLBACK_CONDITION, FALLBACK_DATA_SOURCE,
    FALLBACK_TRAVEL_TIME,
};
use crate::time_patterns::clock::format_local_time;
use crate::traffic_agent::map_links::MapLinks;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic density reported by the sensor feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficDensity {
    Low,
    Medium,
    High,
}

impl fmt::Display for TrafficDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrafficDensity::Low => "Low",
            TrafficDensity::Medium => "Medium",
            TrafficDensity::High => "High",
        };
        f.write_str(label)
    }
}

/// One source's raw output for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub source: String,
    /// Estimated travel time in minutes. The sensor feed reports speed instead.
    pub travel_time: Option<i32>,
    /// Weight in [0, 1] used by the aggregator.
    pub reliability: f64,
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incidents: Vec<String>,
    pub user_reports: Option<u32>,
    pub traffic_density: Option<TrafficDensity>,
    /// km/h
    pub average_speed: Option<u32>,
    pub road_conditions: Option<String>,
}

impl Reading {
    pub fn new(source: &str, reliability: f64) -> Self {
        Self {
            source: source.to_string(),
            travel_time: None,
            reliability,
            condition: None,
            incidents: Vec::new(),
            user_reports: None,
            traffic_density: None,
            average_speed: None,
            road_conditions: None,
        }
    }

    /// Minutes this reading contributes to the weighted average.
    /// Speed-only readings map to a pseudo travel time: 35 below 40 km/h, otherwise 20.
    pub fn effective_travel_time(&self) -> Option<f64> {
        if let Some(minutes) = self.travel_time {
            return Some(minutes as f64);
        }
        self.average_speed
            .map(|speed| if speed < 40 { 35.0 } else { 20.0 })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Fast,
    Normal,
    Delayed,
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RouteStatus::Fast => "fast",
            RouteStatus::Normal => "normal",
            RouteStatus::Delayed => "delayed",
        };
        f.write_str(label)
    }
}

/// The single combined traffic result shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedEstimate {
    pub traffic_condition: String,
    pub estimated_travel_time: String,
    /// Rounded weighted average; `None` when the estimate did not come from live readings.
    pub travel_minutes: Option<u32>,
    pub best_time_to_travel: String,
    pub route_status: RouteStatus,
    pub incidents: Vec<String>,
    pub traffic_density: Option<TrafficDensity>,
    pub average_speed: Option<String>,
}

impl AggregatedEstimate {
    pub fn fallback() -> Self {
        Self {
            traffic_condition: FALLBACK_CONDITION.to_string(),
            estimated_travel_time: FALLBACK_TRAVEL_TIME.to_string(),
            travel_minutes: None,
            best_time_to_travel: FALLBACK_ADVICE.to_string(),
            route_status: RouteStatus::Normal,
            incidents: Vec::new(),
            traffic_density: None,
            average_speed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Immediate,
    TodayOptimal,
    Tomorrow,
    WeeklyInsight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    Info,
}

impl Priority {
    /// Badge text shown next to a recommendation.
    pub fn badge(&self) -> &'static str {
        match self {
            Priority::High => "Urgent",
            Priority::Medium => "Recommended",
            Priority::Low => "Plan Ahead",
            Priority::Info => "Insight",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub message: String,
    pub time_savings: String,
    pub priority: Priority,
}

/// A complete answer to one route request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficReport {
    #[serde(flatten)]
    pub estimate: AggregatedEstimate,
    /// Local wall-clock time of the request, e.g. "5:07:42 PM".
    pub current_time: String,
    pub timestamp: u64,
    pub data_sources: Vec<String>,
    pub confidence_level: u8,
    pub optimal_times: Vec<Recommendation>,
    pub links: MapLinks,
}

impl TrafficReport {
    /// Static answer used whenever live data cannot be assembled.
    pub fn fallback(now: &DateTime<Utc>, links: MapLinks) -> Self {
        Self {
            estimate: AggregatedEstimate::fallback(),
            current_time: format_local_time(now),
            timestamp: now.timestamp().max(0) as u64,
            data_sources: vec![FALLBACK_DATA_SOURCE.to_string()],
            confidence_level: FALLBACK_CONFIDENCE,
            optimal_times: Vec::new(),
            links,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.estimate.travel_minutes.is_none()
    }
}
