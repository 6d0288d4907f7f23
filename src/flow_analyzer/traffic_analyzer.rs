// traffic_analyzer.rs

use crate::errors::{TrafficError, TrafficResult};
use crate::shared_data::{AggregatedEstimate, Reading, RouteStatus};

const HEAVY_ABOVE_MINUTES: u32 = 30;
const MODERATE_ABOVE_MINUTES: u32 = 20;

/// The three readings gathered for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReadings {
    pub map_service: Reading,
    pub crowd_sourced: Reading,
    pub sensor_feed: Reading,
}

impl SourceReadings {
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        [&self.map_service, &self.crowd_sourced, &self.sensor_feed].into_iter()
    }
}

/// Condition label, advice and status for a rounded average travel time.
pub fn classify_travel_time(minutes: u32) -> (&'static str, &'static str, RouteStatus) {
    if minutes > HEAVY_ABOVE_MINUTES {
        (
            "Heavy traffic",
            "Heavy traffic detected. Consider using alternative routes or delaying travel.",
            RouteStatus::Delayed,
        )
    } else if minutes > MODERATE_ABOVE_MINUTES {
        (
            "Moderate traffic",
            "Moderate traffic conditions. Allow extra time for your journey.",
            RouteStatus::Normal,
        )
    } else {
        (
            "Light traffic",
            "Great time to travel! Traffic is currently light.",
            RouteStatus::Fast,
        )
    }
}

/// Reliability-weighted mean of the readings' travel times, rounded to whole minutes.
pub fn weighted_travel_time(readings: &SourceReadings) -> TrafficResult<u32> {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for reading in readings.iter() {
        let minutes = reading
            .effective_travel_time()
            .ok_or_else(|| TrafficError::SourceFailed {
                source_name: reading.source.clone(),
                reason: "reading carries neither travel time nor speed".to_string(),
            })?;
        weighted_sum += minutes * reading.reliability;
        total_weight += reading.reliability;
    }

    if total_weight <= 0.0 {
        return Err(TrafficError::SourceFailed {
            source_name: readings.map_service.source.clone(),
            reason: "all reliabilities are zero".to_string(),
        });
    }

    Ok((weighted_sum / total_weight).round().max(0.0) as u32)
}

/// Combine the three readings into one estimate.
/// Incidents come from the crowd-sourced reading only; density and speed from the sensor feed.
pub fn combine_traffic_sources(readings: &SourceReadings) -> TrafficResult<AggregatedEstimate> {
    let avg_time = weighted_travel_time(readings)?;
    let (condition, advice, status) = classify_travel_time(avg_time);

    let incidents = readings.crowd_sourced.incidents.clone();
    let mut advice = advice.to_string();
    if let Some(first) = incidents.first() {
        advice.push_str(&format!(" Alert: {}", first));
    }

    log::info!(
        "[Analyzer] weighted travel time = {} min, status = {}",
        avg_time,
        status
    );

    Ok(AggregatedEstimate {
        traffic_condition: condition.to_string(),
        estimated_travel_time: format!("{} minutes", avg_time),
        travel_minutes: Some(avg_time),
        best_time_to_travel: advice,
        route_status: status,
        incidents,
        traffic_density: readings.sensor_feed.traffic_density,
        average_speed: readings
            .sensor_feed
            .average_speed
            .map(|speed| format!("{} km/h", speed)),
    })
}

/// Mean reliability as a percentage in [0, 100].
pub fn calculate_confidence_level(readings: &SourceReadings) -> u8 {
    let total: f64 = readings.iter().map(|r| r.reliability).sum();
    let avg = total / 3.0;
    (avg * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_data::TrafficDensity;

    fn readings(map: i32, crowd: i32, speed: u32, incidents: &[&str]) -> SourceReadings {
        let mut map_service = Reading::new("Google Maps", 0.9);
        map_service.travel_time = Some(map);
        let mut crowd_sourced = Reading::new("Waze", 0.85);
        crowd_sourced.travel_time = Some(crowd);
        crowd_sourced.incidents = incidents.iter().map(|s| s.to_string()).collect();
        let mut sensor_feed = Reading::new("Traffic Sensors", 0.8);
        sensor_feed.average_speed = Some(speed);
        sensor_feed.traffic_density = Some(if speed < 40 {
            TrafficDensity::High
        } else {
            TrafficDensity::Low
        });
        SourceReadings {
            map_service,
            crowd_sourced,
            sensor_feed,
        }
    }

    #[test]
    fn rush_hour_readings_are_delayed() {
        let estimate = combine_traffic_sources(&readings(35, 38, 35, &[])).unwrap();
        assert_eq!(estimate.travel_minutes, Some(36));
        assert_eq!(estimate.traffic_condition, "Heavy traffic");
        assert_eq!(estimate.route_status, RouteStatus::Delayed);
        assert_eq!(estimate.estimated_travel_time, "36 minutes");
        assert_eq!(estimate.traffic_density, Some(TrafficDensity::High));
        assert_eq!(estimate.average_speed.as_deref(), Some("35 km/h"));
    }

    #[test]
    fn night_readings_are_fast() {
        let estimate = combine_traffic_sources(&readings(18, 20, 65, &[])).unwrap();
        assert_eq!(estimate.travel_minutes, Some(19));
        assert_eq!(estimate.traffic_condition, "Light traffic");
        assert_eq!(estimate.route_status, RouteStatus::Fast);
    }

    #[test]
    fn first_crowd_incident_is_appended_to_advice() {
        let estimate = combine_traffic_sources(&readings(
            28,
            30,
            50,
            &["Minor accident reported on King Fahd Road", "Construction work ahead"],
        ))
        .unwrap();
        assert_eq!(estimate.route_status, RouteStatus::Normal);
        assert_eq!(
            estimate.best_time_to_travel,
            "Moderate traffic conditions. Allow extra time for your journey. \
             Alert: Minor accident reported on King Fahd Road"
        );
        assert_eq!(estimate.incidents.len(), 2);
    }

    #[test]
    fn map_service_incidents_are_ignored() {
        let mut input = readings(20, 20, 65, &[]);
        input.map_service.incidents = vec!["Road closed".to_string()];
        let estimate = combine_traffic_sources(&input).unwrap();
        assert!(estimate.incidents.is_empty());
        assert!(!estimate.best_time_to_travel.contains("Alert"));
    }

    #[test]
    fn thresholds_cover_every_minute_exactly_once() {
        for minutes in 0..=120u32 {
            let (_, _, status) = classify_travel_time(minutes);
            let expected = if minutes > 30 {
                RouteStatus::Delayed
            } else if minutes > 20 {
                RouteStatus::Normal
            } else {
                RouteStatus::Fast
            };
            assert_eq!(status, expected, "minutes = {}", minutes);
        }
        assert_eq!(classify_travel_time(20).2, RouteStatus::Fast);
        assert_eq!(classify_travel_time(21).2, RouteStatus::Normal);
        assert_eq!(classify_travel_time(30).2, RouteStatus::Normal);
        assert_eq!(classify_travel_time(31).2, RouteStatus::Delayed);
    }

    #[test]
    fn confidence_for_fixed_reliabilities_is_85() {
        assert_eq!(calculate_confidence_level(&readings(20, 22, 65, &[])), 85);
    }

    #[test]
    fn reading_without_time_or_speed_is_rejected() {
        let mut input = readings(20, 22, 65, &[]);
        input.sensor_feed.average_speed = None;
        let err = combine_traffic_sources(&input).unwrap_err();
        assert!(err.is_source_error());
    }
}
