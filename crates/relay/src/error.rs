use thiserror::Error;

/// Ways a relay call can fail.
///
/// None are retried; every variant is terminal for the request that produced
/// it. A GraphQL `errors` array inside a 2xx body is not an error here — it
/// passes through for the caller to interpret.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller sent no query text. Detected before any upstream traffic.
    #[error("Missing query in request body")]
    MissingQuery,

    /// Upstream answered outside the 2xx range.
    #[error("LeetCode API returned {status}")]
    UpstreamStatus { status: u16, body: String },

    /// Upstream answered 2xx but the body was not JSON (bot-filter pages
    /// arrive as HTML).
    #[error("Failed to parse LeetCode API response as JSON")]
    ParseResponse { body: String },

    /// The call never completed (DNS failure, refused connection, timeout).
    #[error("Failed to fetch data from LeetCode API")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// HTTP status the gateway should answer with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingQuery => 400,
            Self::UpstreamStatus { status, .. } => *status,
            Self::ParseResponse { .. } | Self::Transport(_) => 500,
        }
    }

    /// Diagnostic payload surfaced to the caller alongside the message.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            Self::MissingQuery => None,
            Self::UpstreamStatus { body, .. } | Self::ParseResponse { body } => Some(body.clone()),
            Self::Transport(source) => Some(source.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
