//! Gateway-side error types.

use thiserror::Error;

/// A failed submission to the SMS gateway.
///
/// Produced by [`SmsGateway`](crate::services::dispatch::SmsGateway)
/// implementations; the dispatcher wraps it into
/// [`DomainError::SendFailure`](crate::errors::DomainError) together with
/// the destination number.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request never completed (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The gateway answered but refused the message.
    #[error("gateway rejected the message: {status}: {body}")]
    Rejected {
        /// Response status reported by the gateway
        status: String,
        /// Response body, preserved verbatim for diagnostics
        body: String,
    },
}

impl GatewayError {
    /// Wrap a transport-level failure, preserving the cause.
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(source))
    }

    /// Record a vendor-side rejection.
    pub fn rejected(status: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Rejected {
            status: status.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_transport_errors_keep_their_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let err = GatewayError::transport(io);

        assert!(err.to_string().starts_with("transport error"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_rejection_preserves_status_and_body() {
        let err = GatewayError::rejected("400 Bad Request", "invalid recipient");
        assert_eq!(
            err.to_string(),
            "gateway rejected the message: 400 Bad Request: invalid recipient"
        );
    }
}
