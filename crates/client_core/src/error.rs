use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid users url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("users url '{url}' cannot carry path segments")]
    NotABase { url: String },
    #[error("failed to build http client: {0}")]
    Builder(#[source] reqwest::Error),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status}")]
    BadStatus { status: StatusCode },
    #[error("malformed user list: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the server answered but with a non-2xx status.
    pub fn is_bad_status(&self) -> bool {
        matches!(self, Self::BadStatus { .. })
    }
}
