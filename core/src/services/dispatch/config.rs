//! Configuration for the code dispatcher

/// Configuration for [`CodeDispatcher`](super::CodeDispatcher).
///
/// Read into a plain struct at startup and passed to the constructor
/// explicitly; the dispatcher holds no other state of its own.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Sender number for outbound messages (registered with the vendor)
    pub from_number: String,
}

impl DispatchConfig {
    /// Create a configuration with the given sender number.
    pub fn new(from_number: impl Into<String>) -> Self {
        Self {
            from_number: from_number.into(),
        }
    }
}
