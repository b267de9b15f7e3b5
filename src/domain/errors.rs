use thiserror::Error;

/// Errors raised while routing a request to one of the mock operations.
///
/// The `Display` text is the exact message returned to callers in the
/// `error` field of a 400 envelope, so the offending selector is kept as data
/// and only surfaced through logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Invalid aggregation type")]
    UnknownAggregationType { selector: String },

    #[error("Invalid analysis type")]
    UnknownAnalysisType { selector: String },
}

impl DispatchError {
    pub fn selector(&self) -> &str {
        match self {
            DispatchError::UnknownAggregationType { selector }
            | DispatchError::UnknownAnalysisType { selector } => selector,
        }
    }
}

/// Errors for events that cannot be read as a request at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Request event must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}
