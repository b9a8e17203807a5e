use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Underlying error from reqwest library after an API call was made
    #[error("http error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// API answered with a non-2xx status
    #[error("remote error {status}: {}", .error.message)]
    Remote { status: u16, error: ApiError },
    /// Error when a request body cannot be serialized
    #[error("failed to serialize api request: {0}")]
    JsonSerialize(serde_json::Error),
    /// Error when a response cannot be deserialized into a Rust type
    #[error("failed to deserialize api response: {0}")]
    JsonDeserialize(serde_json::Error),
    /// A header name or value could not be encoded
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
    /// Error from client side validation, raised before any request is sent
    #[error("invalid args: {0}")]
    InvalidArgument(String),
}

impl ClientError {
    /// HTTP status of a remote failure, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Remote { status, .. } => Some(*status),
            ClientError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ClientError::InvalidArgument(_))
    }
}

/// Error object CompreFace returns with non-2xx responses, e.g.
/// `{"message": "Subject name is empty; ", "code": 26}`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub code: Option<i64>,
}

impl ApiError {
    /// Decodes the error body, falling back to the raw text (or the status'
    /// canonical reason for an empty body) when it is not the JSON error object.
    pub(crate) fn from_body(status: reqwest::StatusCode, bytes: &[u8]) -> Self {
        if let Ok(error) = serde_json::from_slice::<ApiError>(bytes) {
            return error;
        }
        let text = String::from_utf8_lossy(bytes).trim().to_string();
        let message = if text.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            text
        };
        ApiError {
            message,
            code: None,
        }
    }
}

/// Usage error caught before dispatch. Logged here since no request follows.
pub(crate) fn invalid_argument<S: Into<String>>(reason: S) -> ClientError {
    let reason = reason.into();
    crate::error!("CompreFace request not sent: {}", reason);
    ClientError::InvalidArgument(reason)
}

pub(crate) fn map_deserialization_error(e: serde_json::Error, bytes: &[u8]) -> ClientError {
    crate::trace!(
        "failed deserialization of: {}",
        String::from_utf8_lossy(bytes)
    );
    ClientError::JsonDeserialize(e)
}

pub(crate) fn map_serialization_error(e: serde_json::Error) -> ClientError {
    ClientError::JsonSerialize(e)
}
