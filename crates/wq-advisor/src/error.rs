use thiserror::Error;

/// Failures of the external narrative service. These never block report
/// generation; the caller decides how loudly to surface them.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("API key not configured (set OPENAI_API_KEY)")]
    MissingKey,

    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse API response: {0}")]
    Parse(String),

    #[error("API response contained no choices")]
    EmptyResponse,
}
