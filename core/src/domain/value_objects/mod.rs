//! Value objects representing immutable domain concepts.

pub mod outbound_message;

// Re-export commonly used types
pub use outbound_message::OutboundMessage;
