//! Outbound SMS message value object.

use serde::Serialize;

/// An ephemeral SMS message handed to the gateway for delivery.
///
/// Exists only for the duration of a send call; nothing retains it
/// afterwards. Serializes to the `{from, to, text}` shape the gateway wire
/// payload embeds directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    /// Sender number, fixed from configuration
    pub from: String,
    /// Recipient number, caller-supplied
    pub to: String,
    /// Message body text
    pub text: String,
}

impl OutboundMessage {
    /// Create a message ready for submission.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_wire_shape() {
        let message = OutboundMessage::new("+15550001111", "+821012345678", "hello");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "from": "+15550001111",
                "to": "+821012345678",
                "text": "hello",
            })
        );
    }
}
