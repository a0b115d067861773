use thiserror::Error;

/// Failure taxonomy for the orchestration layer. Guidance generation never
/// appears here: its failures are absorbed into `Guidance::Fallback`.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid process configuration (e.g. no API key). Fatal to
    /// the requested operation; the message is surfaced verbatim.
    #[error("{0}")]
    Configuration(String),

    /// The upstream platform answered successfully but with an empty result set.
    #[error("{0}")]
    NotFound(String),

    /// Non-success HTTP status from the video platform, carrying the
    /// upstream-provided message.
    #[error("{message}")]
    Upstream { message: String },

    /// Transport-level failure. Surfaced to users as a generic sentence
    /// chosen by the call site, never with transport internals.
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn missing_api_key() -> Self {
        Error::Configuration(
            "YouTube API key is not configured. Please set the YOUTUBE_API_KEY environment variable."
                .to_string(),
        )
    }

    /// Message shown to the end user. Network failures are replaced by the
    /// caller-supplied generic sentence; everything else is surfaced verbatim.
    pub fn user_message(&self, network_fallback: &str) -> String {
        match self {
            Error::Network(_) => network_fallback.to_string(),
            other => other.to_string(),
        }
    }
}
