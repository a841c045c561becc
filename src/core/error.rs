use thiserror::Error;

/// The error type for the live provider path and client construction.
///
/// Data operations never hand this to callers: a live failure is logged and
/// the synthetic generator answers instead. It surfaces publicly only from
/// [`EpClientBuilder::build`](crate::core::EpClientBuilder::build).
#[derive(Debug, Error)]
pub enum EpError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The requested resource does not exist upstream (404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The provider throttled the request (429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429.
        url: String,
    },

    /// The provider failed with a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The payload parsed but did not match any accepted shape.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The payload was well formed but carried no usable rows.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// The client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EpError {
    /// Maps a non-success HTTP status to the most specific variant.
    pub(crate) fn from_status(code: u16, url: String) -> Self {
        match code {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status: code, url },
            _ => Self::Status { status: code, url },
        }
    }
}
