//! Verification code dispatch
//!
//! Generates a short numeric one-time code and delivers it to a phone
//! number through the configured SMS gateway. The module owns:
//! - the [`SmsGateway`] port implemented by the infrastructure layer
//! - the [`CodeDispatcher`] service and its [`DispatchConfig`]

mod config;
mod service;
mod traits;

pub use config::DispatchConfig;
pub use service::CodeDispatcher;
pub use traits::SmsGateway;
