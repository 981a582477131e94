// Error taxonomy for remote calls and startup configuration
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::RemoteError;

/// Failure of a single SpaceTraders round trip.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("could not build request: {0}")]
    RequestConstruction(String),

    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request rejected with status {status}: {}", describe_rejection(.error))]
    Rejected {
        status: StatusCode,
        error: Option<RemoteError>,
    },

    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification used for logging and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequestConstruction,
    Transport,
    BodyRead,
    Decode,
}

impl ApiError {
    /// Builder failures surface from `send()` too; keep them out of the transport bucket.
    pub(crate) fn from_send(error: reqwest::Error) -> Self {
        if error.is_builder() {
            ApiError::RequestConstruction(error.to_string())
        } else {
            ApiError::Transport(error)
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::RequestConstruction(_) => ErrorKind::RequestConstruction,
            ApiError::Transport(_) | ApiError::Rejected { .. } => ErrorKind::Transport,
            ApiError::BodyRead(_) => ErrorKind::BodyRead,
            ApiError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport(_) | ApiError::BodyRead(_) => true,
            ApiError::Rejected { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            ApiError::RequestConstruction(_) | ApiError::Decode(_) => false,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Rejected { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(e) | ApiError::BodyRead(e) => e.status(),
            _ => None,
        }
    }

    /// The service's own error envelope, when the rejection carried one.
    pub fn remote_error(&self) -> Option<&RemoteError> {
        match self {
            ApiError::Rejected { error, .. } => error.as_ref(),
            _ => None,
        }
    }
}

fn describe_rejection(error: &Option<RemoteError>) -> String {
    match error {
        Some(remote) => format!("{} (code {})", remote.message, remote.code),
        None => "no error body".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },

    #[error("no credential found in ${env_var} or {path}")]
    MissingCredential { env_var: String, path: String },
}
