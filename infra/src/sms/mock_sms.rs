//! Mock SMS gateway
//!
//! Development and testing double for the gateway port: accepted messages
//! are recorded and logged instead of leaving the process.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use aegis_core::domain::value_objects::OutboundMessage;
use aegis_core::errors::GatewayError;
use aegis_core::services::dispatch::SmsGateway;

use crate::sms::mask_phone_number;

/// Mock gateway that records outbound messages.
///
/// Clones share the same message log and counter, so a test can hold one
/// handle while the dispatcher owns another.
#[derive(Clone, Default)]
pub struct MockSmsGateway {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    send_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockSmsGateway {
    /// Create a mock gateway that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock gateway that fails every send, for exercising error
    /// paths.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Number of messages accepted so far.
    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }

    /// The most recently accepted message, if any.
    pub fn last_message(&self) -> Option<OutboundMessage> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

#[async_trait]
impl SmsGateway for MockSmsGateway {
    async fn send(&self, message: &OutboundMessage) -> Result<String, GatewayError> {
        if self.simulate_failure {
            warn!(
                to = %mask_phone_number(&message.to),
                "mock gateway simulating send failure"
            );
            return Err(GatewayError::rejected("simulated", "mock gateway failure"));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.clone());

        info!(
            provider = "mock",
            to = %mask_phone_number(&message.to),
            message_id = %message_id,
            count,
            "SMS recorded (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
