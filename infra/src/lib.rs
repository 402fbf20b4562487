//! # Aegis Infrastructure
//!
//! Infrastructure layer for the Aegis SMS verification service. It provides
//! the concrete gateway implementations behind the
//! [`SmsGateway`](aegis_core::services::dispatch::SmsGateway) port:
//!
//! - **Solapi**: production delivery through the Solapi HTTP API
//! - **Mock**: development/testing double that records messages
//!
//! plus the configuration both are constructed from.

pub mod config;
pub mod sms;

// Re-export commonly used types
pub use config::SmsConfig;
pub use sms::{create_sms_gateway, MockSmsGateway, SolapiConfig, SolapiGateway};

use thiserror::Error;

/// Infrastructure-specific error types.
///
/// These surface at startup, when a gateway handle is constructed from
/// configuration. Send-time failures travel as
/// [`GatewayError`](aegis_core::errors::GatewayError) instead.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
