use thiserror::Error;

/// Any store failure collapses to one of these; callers never retry on
/// their own, they surface the failure and let the user re-trigger.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("store returned status {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("no {0} row matched")]
    NotFound(String),
}

impl GatewayError {
    pub(crate) fn network(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }

    pub(crate) fn decode(e: reqwest::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
