use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    /// A location field was empty or whitespace only.
    #[error("{0}")]
    InputValidation(String),

    #[error("source '{source_name}' failed: {reason}")]
    SourceFailed { source_name: String, reason: String },

    #[error("source '{source_name}' timed out after {after:?}")]
    SourceTimedOut { source_name: String, after: Duration },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TrafficError {
    /// Source errors are recoverable: the agent answers them with the fallback report.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            TrafficError::SourceFailed { .. } | TrafficError::SourceTimedOut { .. }
        )
    }
}

pub type TrafficResult<T> = Result<T, TrafficError>;
