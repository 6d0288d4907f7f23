pub mod scripted;
pub mod synthetic;

use crate::errors::TrafficResult;
use crate::shared_data::Reading;
use crate::time_patterns::TrafficClock;
use futures::future::BoxFuture;

pub use scripted::ScriptedSource;
pub use synthetic::{SyntheticKind, SyntheticSource};

/// What a source is asked for: the request's clock and whether that day is a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceQuery {
    pub clock: TrafficClock,
    pub is_weekend: bool,
}

/// A provider of one traffic reading per request.
///
/// Implementations must not block; latency belongs inside the returned future
/// so the agent can run all sources concurrently.
pub trait TrafficSource: Send + Sync {
    fn name(&self) -> &str;

    fn fetch(&self, query: SourceQuery) -> BoxFuture<'static, TrafficResult<Reading>>;
}
