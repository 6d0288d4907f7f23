use crate::errors::{TrafficError, TrafficResult};
use crate::shared_data::Reading;
use crate::traffic_sources::{SourceQuery, TrafficSource};
use futures::future::{self, BoxFuture, FutureExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Script {
    Reply(Reading),
    Fail(String),
    Stall,
}

/// Deterministic stand-in for a live source. Replays a fixed outcome and
/// counts how often it was asked.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    name: String,
    script: Script,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn replying(reading: Reading) -> Self {
        Self {
            name: reading.source.clone(),
            script: Script::Reply(reading),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(name: &str, reason: &str) -> Self {
        Self {
            name: name.to_string(),
            script: Script::Fail(reason.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Never resolves; only a timeout gets the caller past it.
    pub fn stalling(name: &str) -> Self {
        Self {
            name: name.to_string(),
            script: Script::Stall,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle on the call counter, still readable after the source is boxed.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl TrafficSource for ScriptedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, _query: SourceQuery) -> BoxFuture<'static, TrafficResult<Reading>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(reading) => future::ready(Ok(reading.clone())).boxed(),
            Script::Fail(reason) => future::ready(Err(TrafficError::SourceFailed {
                source_name: self.name.clone(),
                reason: reason.clone(),
            }))
            .boxed(),
            Script::Stall => future::pending().boxed(),
        }
    }
}
