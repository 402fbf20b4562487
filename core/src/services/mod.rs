//! Business services containing domain logic.

pub mod dispatch;

// Re-export commonly used types
pub use dispatch::{CodeDispatcher, DispatchConfig, SmsGateway};
