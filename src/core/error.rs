//! Failures of a rates exchange

/// Ways a single rates exchange can fail. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum FixerError {
    /// The server could not be reached, or it answered with a non-success status.
    #[error("Couldn't connect to server at {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("Couldn't read response from {url}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Couldn't parse response from {url}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FixerError {
    pub fn url(&self) -> &str {
        match self {
            FixerError::Connection { url, .. }
            | FixerError::Read { url, .. }
            | FixerError::Parse { url, .. } => url,
        }
    }
}
