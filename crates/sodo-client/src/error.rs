//! Errors returned by [`SolverService`](crate::SolverService) calls.

/// Errors that can occur while talking to the solving service.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum ServiceError {
    /// The request never produced an HTTP response.
    #[display("request failed: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },
    /// The server answered with a non-success status.
    #[display("server answered with status {code}")]
    Status {
        /// HTTP status code.
        code: u16,
    },
    /// The reply body did not have the expected shape.
    #[display("malformed reply: {message}")]
    Decode {
        /// Description of the decoding failure.
        message: String,
    },
    /// The server answered with an `{error}` payload.
    #[display("{message}")]
    Rejected {
        /// The server's error message.
        message: String,
    },
}

impl ServiceError {
    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status {
                code: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}
