use thiserror::Error;

pub const COULD_NOT_GENERATE_MESSAGE: &str =
    "Could not generate an eco-fact right now. Please try again!";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to load an eco-fact. Please try again later.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Failure of the transport itself, before any HTTP status was seen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("no response received: {0}")]
    NoResponse(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },
    #[error("response envelope did not contain generated text")]
    MalformedResponse,
    #[error("server responded with {status} {reason}: {body}")]
    ServerError {
        status: u16,
        reason: String,
        body: String,
    },
    #[error("network error: {0}")]
    Network(#[from] TransportError),
}

impl FetchError {
    /// The sentence shown on the page in place of a fact.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::MalformedResponse => COULD_NOT_GENERATE_MESSAGE,
            FetchError::RateLimited { .. } | FetchError::ServerError { .. } => {
                GENERIC_FAILURE_MESSAGE
            }
            FetchError::Network(_) => NETWORK_ERROR_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_and_server_errors_share_the_generic_message() {
        let limited = FetchError::RateLimited { attempts: 5 };
        let server = FetchError::ServerError {
            status: 500,
            reason: "Internal Server Error".to_string(),
            body: String::new(),
        };
        assert_eq!(limited.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(server.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn transport_errors_become_network_errors() {
        let err: FetchError = TransportError::NoResponse("connection reset".to_string()).into();
        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
        assert_eq!(
            err.to_string(),
            "network error: no response received: connection reset"
        );
    }

    #[test]
    fn messages_never_expose_status_codes() {
        let err = FetchError::ServerError {
            status: 503,
            reason: "Service Unavailable".to_string(),
            body: "{\"error\":{}}".to_string(),
        };
        assert!(!err.user_message().contains("503"));
        assert!(err.to_string().contains("503"));
    }
}
