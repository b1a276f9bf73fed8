use thiserror::Error;

/// Failure of a single backend call, as surfaced to the view.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Network unreachable or a non-2xx HTTP status.
    #[error("{}", transport_message(.status, .message))]
    Transport { status: Option<u16>, message: String },

    /// The envelope came back with a status other than `"OK"`.
    #[error("backend error: {message}")]
    Application { message: String },

    /// Body was not JSON or lacked the expected fields.
    #[error("malformed response: {message}")]
    Malformed { message: String },

    /// Rejected locally, no request was issued.
    #[error("invalid task draft: {reason}")]
    InvalidDraft { reason: String },
}

impl ApiError {
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self::Application {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Only transport failures are worth retrying by hand.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match *status {
        Some(code) if message.is_empty() => format!("http {}", code),
        Some(code) => format!("http {}: {}", code, message),
        None => format!("transport error: {}", message),
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}
