//! Code dispatcher service

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::VerificationCode;
use crate::domain::value_objects::OutboundMessage;
use crate::errors::{DomainError, DomainResult};

use super::config::DispatchConfig;
use super::traits::SmsGateway;

/// Dispatches one-time verification codes over SMS.
///
/// Owns a shared gateway handle and the configured sender number. Each
/// invocation makes exactly one outbound call; a failed send is surfaced
/// immediately with no internal retry, and the generated code is discarded.
pub struct CodeDispatcher<G: SmsGateway + ?Sized> {
    gateway: Arc<G>,
    config: DispatchConfig,
}

impl<G: SmsGateway + ?Sized> CodeDispatcher<G> {
    /// Create a dispatcher over an already-constructed gateway handle.
    pub fn new(gateway: Arc<G>, config: DispatchConfig) -> Self {
        Self { gateway, config }
    }

    /// Generate a verification code and deliver it to `to`.
    ///
    /// No format validation is applied to the destination number; the
    /// gateway may reject numbers it cannot deliver to. On success the
    /// generated code is returned for the caller to store and compare
    /// against later input.
    pub async fn send_code(&self, to: &str) -> DomainResult<VerificationCode> {
        let code = VerificationCode::generate();
        let message = OutboundMessage::new(
            self.config.from_number.clone(),
            to,
            format!("Aegis verification code. [{}]", code),
        );

        match self.gateway.send(&message).await {
            Ok(message_id) => {
                info!(
                    provider = self.gateway.provider_name(),
                    message_id = %message_id,
                    "verification code sent"
                );
                Ok(code)
            }
            Err(source) => {
                error!(
                    phone = to,
                    provider = self.gateway.provider_name(),
                    error = %source,
                    "failed to send verification SMS"
                );
                Err(DomainError::SendFailure {
                    phone: to.to_string(),
                    source,
                })
            }
        }
    }
}
