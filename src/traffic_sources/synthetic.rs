use crate::errors::{TrafficError, TrafficResult};
use crate::global_variables::{
    LUNCH_HOURS, RELIABILITY_CROWD_SOURCED, RELIABILITY_MAP_SERVICE, RELIABILITY_SENSOR_FEED,
    RUSH_HOURS, SOURCE_CROWD_SOURCED, SOURCE_MAP_SERVICE, SOURCE_SENSOR_FEED,
};
use crate::shared_data::{Reading, TrafficDensity};
use crate::traffic_sources::{SourceQuery, TrafficSource};
use futures::future::{BoxFuture, FutureExt};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use tokio::time::{sleep, Duration};

const CROWD_INCIDENT_PROBABILITY: f64 = 0.3;
const CROWD_INCIDENT_DELAY: i32 = 8;
const CROWD_INCIDENTS: [&str; 2] = [
    "Minor accident reported on King Fahd Road",
    "Construction work ahead",
];

fn is_rush_hour(hour: u8) -> bool {
    RUSH_HOURS.contains(&hour)
}

fn is_lunch_hour(hour: u8) -> bool {
    LUNCH_HOURS.contains(&hour)
}

/// Primary map service: 20 min base, 35 in rush hour, 28 over lunch, jittered by up to 5 minutes.
pub fn sample_map_service<R: Rng + ?Sized>(hour: u8, rng: &mut R) -> Reading {
    let (base_time, condition) = if is_rush_hour(hour) {
        (35, "Heavy traffic due to rush hour")
    } else if is_lunch_hour(hour) {
        (28, "Moderate traffic - lunch hour")
    } else {
        (20, "Normal traffic")
    };

    let mut reading = Reading::new(SOURCE_MAP_SERVICE, RELIABILITY_MAP_SERVICE);
    reading.travel_time = Some(base_time + rng.random_range(-5..=5));
    reading.condition = Some(condition.to_string());
    reading
}

/// Crowd-sourced service: 22 min base, sometimes carrying incidents (+8 min).
/// Rush hour overrides the base with 38 before jitter.
pub fn sample_crowd_sourced<R: Rng + ?Sized>(hour: u8, rng: &mut R) -> Reading {
    let mut base_time = 22;
    let mut incidents = Vec::new();

    if rng.random_bool(CROWD_INCIDENT_PROBABILITY) {
        incidents = CROWD_INCIDENTS.iter().map(|s| s.to_string()).collect();
        base_time += CROWD_INCIDENT_DELAY;
    }
    if is_rush_hour(hour) {
        base_time = 38;
    }

    let mut reading = Reading::new(SOURCE_CROWD_SOURCED, RELIABILITY_CROWD_SOURCED);
    reading.travel_time = Some(base_time + rng.random_range(-4..=4));
    reading.incidents = incidents;
    reading.user_reports = Some(rng.random_range(10..=59));
    reading
}

/// Local sensor feed. Deterministic: density and speed follow the hour and weekend flag.
pub fn sample_sensor_feed(hour: u8, is_weekend: bool) -> Reading {
    let (density, speed) = if !is_weekend && is_rush_hour(hour) {
        (TrafficDensity::High, 35)
    } else if is_lunch_hour(hour) {
        (TrafficDensity::Medium, 50)
    } else {
        (TrafficDensity::Low, 65)
    };

    let mut reading = Reading::new(SOURCE_SENSOR_FEED, RELIABILITY_SENSOR_FEED);
    reading.traffic_density = Some(density);
    reading.average_speed = Some(speed);
    reading.road_conditions = Some("Clear".to_string());
    reading
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticKind {
    MapService,
    CrowdSourced,
    SensorFeed,
}

impl SyntheticKind {
    pub fn source_name(&self) -> &'static str {
        match self {
            SyntheticKind::MapService => SOURCE_MAP_SERVICE,
            SyntheticKind::CrowdSourced => SOURCE_CROWD_SOURCED,
            SyntheticKind::SensorFeed => SOURCE_SENSOR_FEED,
        }
    }
}

/// Random-number source dressed up as a remote traffic API.
pub struct SyntheticSource {
    kind: SyntheticKind,
    latency: Duration,
    rng: Arc<Mutex<SmallRng>>,
}

impl SyntheticSource {
    pub fn new(kind: SyntheticKind, latency: Duration) -> Self {
        Self {
            kind,
            latency,
            rng: Arc::new(Mutex::new(SmallRng::from_rng(&mut rand::rng()))),
        }
    }

    /// Same as `new` but reproducible across runs.
    pub fn with_seed(kind: SyntheticKind, latency: Duration, seed: u64) -> Self {
        Self {
            kind,
            latency,
            rng: Arc::new(Mutex::new(SmallRng::seed_from_u64(seed))),
        }
    }
}

impl TrafficSource for SyntheticSource {
    fn name(&self) -> &str {
        self.kind.source_name()
    }

    fn fetch(&self, query: SourceQuery) -> BoxFuture<'static, TrafficResult<Reading>> {
        let kind = self.kind;
        let latency = self.latency;
        let rng = Arc::clone(&self.rng);

        async move {
            sleep(latency).await;
            let hour = query.clock.hour;
            let reading = {
                let mut rng = rng.lock().map_err(|_| TrafficError::SourceFailed {
                    source_name: kind.source_name().to_string(),
                    reason: "random generator lock poisoned".to_string(),
                })?;
                match kind {
                    SyntheticKind::MapService => sample_map_service(hour, &mut *rng),
                    SyntheticKind::CrowdSourced => sample_crowd_sourced(hour, &mut *rng),
                    SyntheticKind::SensorFeed => sample_sensor_feed(hour, query.is_weekend),
                }
            };
            log::debug!("[{}] reading: {:?}", kind.source_name(), reading);
            Ok(reading)
        }
        .boxed()
    }
}
