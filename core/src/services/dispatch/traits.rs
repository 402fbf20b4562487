//! Gateway port for SMS delivery

use async_trait::async_trait;

use crate::domain::value_objects::OutboundMessage;
use crate::errors::GatewayError;

/// Port to the external SMS gateway.
///
/// Implementations live in the infrastructure layer (Solapi client, mock).
/// A handle is constructed once at startup and shared across all concurrent
/// invocations, so implementations must be safe for concurrent use and must
/// not require mutation after construction.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Submit a message for delivery.
    ///
    /// Returns the vendor-assigned message id on acceptance.
    async fn send(&self, message: &OutboundMessage) -> Result<String, GatewayError>;

    /// Name of the gateway provider (e.g. "Solapi", "Mock").
    fn provider_name(&self) -> &str;
}
