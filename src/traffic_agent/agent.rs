use crate::config::AgentConfig;
use crate::errors::{TrafficError, TrafficResult};
use crate::flow_analyzer::{
    calculate_confidence_level, combine_traffic_sources, generate_optimal_travel_times,
    SourceReadings,
};
use crate::global_variables::{DATA_SOURCE_LABELS, INPUT_VALIDATION_MESSAGE};
use crate::shared_data::{Reading, TrafficReport};
use crate::time_patterns::clock::format_local_time;
use crate::time_patterns::TrafficClock;
use crate::traffic_agent::map_links::MapLinks;
use crate::traffic_sources::{SourceQuery, SyntheticKind, SyntheticSource, TrafficSource};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::time::{timeout, Duration};

/// The two location fields of one request, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn validate(&self) -> TrafficResult<()> {
        if self.start.trim().is_empty() || self.end.trim().is_empty() {
            return Err(TrafficError::InputValidation(
                INPUT_VALIDATION_MESSAGE.to_string(),
            ));
        }
        Ok(())
    }
}

/// Gathers the three source readings for a route and turns them into a report.
pub struct TrafficAgent {
    map_service: Arc<dyn TrafficSource>,
    crowd_sourced: Arc<dyn TrafficSource>,
    sensor_feed: Arc<dyn TrafficSource>,
    config: AgentConfig,
}

impl TrafficAgent {
    /// Agent backed by the synthetic sources, with latencies taken from `config`.
    pub fn new(config: AgentConfig) -> Self {
        let source = |kind, ms| -> Arc<dyn TrafficSource> {
            Arc::new(SyntheticSource::new(kind, Duration::from_millis(ms)))
        };
        Self {
            map_service: source(SyntheticKind::MapService, config.map_service_latency_ms),
            crowd_sourced: source(SyntheticKind::CrowdSourced, config.crowd_sourced_latency_ms),
            sensor_feed: source(SyntheticKind::SensorFeed, config.sensor_feed_latency_ms),
            config,
        }
    }

    pub fn with_sources(
        map_service: Arc<dyn TrafficSource>,
        crowd_sourced: Arc<dyn TrafficSource>,
        sensor_feed: Arc<dyn TrafficSource>,
        config: AgentConfig,
    ) -> Self {
        Self {
            map_service,
            crowd_sourced,
            sensor_feed,
            config,
        }
    }

    /// Answer one route request.
    ///
    /// Fails only when a location is blank, in which case no source is contacted.
    /// A failing or slow source never reaches the caller: the whole answer
    /// degrades to the fallback report instead.
    pub async fn get_traffic_update(
        &self,
        request: &RouteRequest,
        now: DateTime<Utc>,
    ) -> TrafficResult<TrafficReport> {
        request.validate()?;

        let clock = TrafficClock::from_datetime(&now);
        let links = MapLinks::for_route(&request.start, &request.end);
        log::info!(
            "[Agent] {} -> {} at hour {} (day {})",
            request.start.trim(),
            request.end.trim(),
            clock.hour,
            clock.weekday
        );

        match self.live_report(clock, &now, links.clone()).await {
            Ok(report) => Ok(report),
            Err(e) if e.is_source_error() => {
                log::warn!("[Agent] falling back to static estimate: {}", e);
                Ok(TrafficReport::fallback(&now, links))
            }
            Err(e) => Err(e),
        }
    }

    async fn live_report(
        &self,
        clock: TrafficClock,
        now: &DateTime<Utc>,
        links: MapLinks,
    ) -> TrafficResult<TrafficReport> {
        let readings = self.fetch_readings(clock).await?;
        let estimate = combine_traffic_sources(&readings)?;
        let optimal_times = generate_optimal_travel_times(clock, &self.config);

        Ok(TrafficReport {
            estimate,
            current_time: format_local_time(now),
            timestamp: now.timestamp().max(0) as u64,
            data_sources: DATA_SOURCE_LABELS.iter().map(|s| s.to_string()).collect(),
            confidence_level: calculate_confidence_level(&readings),
            optimal_times,
            links,
        })
    }

    /// Query all sources concurrently; any failure or timeout fails the whole set.
    pub async fn fetch_readings(&self, clock: TrafficClock) -> TrafficResult<SourceReadings> {
        let query = SourceQuery {
            clock,
            is_weekend: self.config.is_weekend(clock.weekday),
        };
        let limit = self.config.source_timeout();

        let (map_service, crowd_sourced, sensor_feed) = tokio::try_join!(
            fetch_with_timeout(self.map_service.as_ref(), query, limit),
            fetch_with_timeout(self.crowd_sourced.as_ref(), query, limit),
            fetch_with_timeout(self.sensor_feed.as_ref(), query, limit),
        )?;

        Ok(SourceReadings {
            map_service,
            crowd_sourced,
            sensor_feed,
        })
    }
}

async fn fetch_with_timeout(
    source: &dyn TrafficSource,
    query: SourceQuery,
    limit: Duration,
) -> TrafficResult<Reading> {
    match timeout(limit, source.fetch(query)).await {
        Ok(result) => result,
        Err(_) => Err(TrafficError::SourceTimedOut {
            source_name: source.name().to_string(),
            after: limit,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traffic_sources::synthetic::sample_sensor_feed;
    use crate::traffic_sources::ScriptedSource;
    use chrono::TimeZone;

    fn reading(source: &str, reliability: f64, minutes: i32) -> Reading {
        let mut reading = Reading::new(source, reliability);
        reading.travel_time = Some(minutes);
        reading
    }

    #[test]
    fn blank_fields_fail_validation() {
        assert!(RouteRequest::new("Corniche Road", "Red Sea Mall").validate().is_ok());
        for (start, end) in [("", "Red Sea Mall"), ("Corniche Road", "   "), (" \t", "\n")] {
            let err = RouteRequest::new(start, end).validate().unwrap_err();
            assert_eq!(
                err.to_string(),
                "Please enter both starting point and destination"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_source_times_out_into_fallback() {
        let agent = TrafficAgent::with_sources(
            Arc::new(ScriptedSource::replying(reading("Google Maps", 0.9, 20))),
            Arc::new(ScriptedSource::stalling("Waze")),
            Arc::new(ScriptedSource::replying(sample_sensor_feed(2, false))),
            AgentConfig::default(),
        );
        // Tuesday 02:00 in Riyadh
        let now = Utc.with_ymd_and_hms(2024, 3, 4, 23, 0, 0).unwrap();
        let err = agent
            .fetch_readings(TrafficClock::from_datetime(&now))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TrafficError::SourceTimedOut { ref source_name, .. } if source_name == "Waze"
        ));

        let report = agent
            .get_traffic_update(&RouteRequest::new("a", "b"), now)
            .await
            .unwrap();
        assert!(report.is_fallback());
        assert_eq!(report.confidence_level, 50);
    }

    #[tokio::test]
    async fn live_report_carries_labels_and_links() {
        let agent = TrafficAgent::with_sources(
            Arc::new(ScriptedSource::replying(reading("Google Maps", 0.9, 18))),
            Arc::new(ScriptedSource::replying(reading("Waze", 0.85, 20))),
            Arc::new(ScriptedSource::replying(sample_sensor_feed(2, false))),
            AgentConfig::default(),
        );
        let now = Utc.with_ymd_and_hms(2024, 3, 4, 23, 0, 0).unwrap();
        let report = agent
            .get_traffic_update(&RouteRequest::new("Red Sea Mall", "Tahlia Street"), now)
            .await
            .unwrap();
        assert_eq!(report.estimate.travel_minutes, Some(19));
        assert_eq!(
            report.data_sources,
            vec!["Google Maps API", "Waze Traffic Data", "Local Traffic Sensors"]
        );
        assert_eq!(report.current_time, "2:00:00 AM");
        assert_eq!(report.timestamp, now.timestamp() as u64);
        assert!(report.links.navigate.ends_with("q=Tahlia%20Street"));
    }
}
