//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::GatewayError;

use thiserror::Error;

/// Core domain errors surfaced by the dispatch service.
///
/// There is deliberately a single send-side failure kind: the dispatcher
/// draws no line between transient and permanent gateway failures. Retry
/// classification belongs to the caller.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The gateway did not accept the verification message.
    #[error("failed to send verification SMS to {phone}")]
    SendFailure {
        /// Destination number the send was addressed to
        phone: String,
        /// Underlying gateway cause, kept for diagnostics
        #[source]
        source: GatewayError,
    },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_send_failure_exposes_the_gateway_cause() {
        let err = DomainError::SendFailure {
            phone: "+821012345678".to_string(),
            source: GatewayError::rejected("401 Unauthorized", "invalid signature"),
        };

        assert_eq!(
            err.to_string(),
            "failed to send verification SMS to +821012345678"
        );

        let cause = err.source().expect("gateway cause should be attached");
        assert!(cause.to_string().contains("401 Unauthorized"));
    }
}
