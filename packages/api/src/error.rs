use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Expected a response body but got 204 No Content")]
    EmptyBody,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API base URL: {0:?}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
