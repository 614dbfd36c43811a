// Error types for transfer calls
use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    // Client setup
    Build(reqwest::Error),

    // Request never completed (connect refused, connect timeout, body read)
    Transport(reqwest::Error),

    // Service answered outside 2xx
    Status { status: u16, body: String },

    // 2xx body that is not a TransferResponse
    Decode { source: serde_json::Error, body: String },
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_application(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Raw response body, when the service sent one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build(e) => write!(f, "Failed to build HTTP client: {}", e),
            Self::Transport(e) => write!(f, "Transfer request failed: {}", e),
            Self::Status { status, body } => {
                write!(f, "Failed to transfer funds: HTTP {} - {}", status, body)
            }
            Self::Decode { source, body } => {
                write!(f, "Failed to parse transfer response: {} (body: {})", source, body)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Build(e) | Self::Transport(e) => Some(e),
            Self::Decode { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}
