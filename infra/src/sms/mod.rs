//! SMS gateway implementations
//!
//! Adapters for the [`SmsGateway`] port defined in `aegis_core`:
//!
//! - [`SolapiGateway`]: production delivery through the Solapi HTTP API
//! - [`MockSmsGateway`]: development/testing double that records messages
//!
//! [`create_sms_gateway`] selects the implementation from configuration.

use std::sync::Arc;

use aegis_core::services::dispatch::SmsGateway;

use crate::config::SmsConfig;
use crate::InfrastructureError;

pub mod mock_sms;
pub mod solapi;

// Re-export commonly used types
pub use mock_sms::MockSmsGateway;
pub use solapi::{SolapiConfig, SolapiGateway};

/// Create an SMS gateway from configuration.
///
/// An unknown provider is a configuration error: gateway construction
/// happens once at startup, and a misconfigured provider should stop the
/// process there rather than at the first send.
pub fn create_sms_gateway(
    config: &SmsConfig,
) -> Result<Arc<dyn SmsGateway>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" => Ok(Arc::new(MockSmsGateway::new())),
        "solapi" => {
            let gateway = SolapiGateway::new(SolapiConfig {
                api_key: config.api_key.clone(),
                api_secret: config.api_secret.clone(),
                base_url: config.base_url.clone(),
                request_timeout_secs: solapi::DEFAULT_REQUEST_TIMEOUT_SECS,
            })?;
            Ok(Arc::new(gateway))
        }
        other => Err(InfrastructureError::Config(format!(
            "unknown SMS provider '{}'",
            other
        ))),
    }
}

/// Mask a phone number for logging, keeping the last four digits visible.
pub fn mask_phone_number(phone: &str) -> String {
    const VISIBLE: usize = 4;

    if phone.len() <= VISIBLE {
        return "*".repeat(phone.len());
    }

    let (prefix, digits) = match phone.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", phone),
    };
    let masked = digits.len().saturating_sub(VISIBLE);
    format!("{}{}{}", prefix, "*".repeat(masked), &digits[masked..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    fn config_for(provider: &str) -> SmsConfig {
        SmsConfig {
            provider: provider.to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            from_number: "+15550001111".to_string(),
        }
    }

    #[test]
    fn test_factory_selects_mock_provider() {
        let gateway = create_sms_gateway(&config_for("mock")).unwrap();
        assert_eq!(gateway.provider_name(), "Mock");
    }

    #[test]
    fn test_factory_selects_solapi_provider() {
        let gateway = create_sms_gateway(&config_for("solapi")).unwrap();
        assert_eq!(gateway.provider_name(), "Solapi");
    }

    #[test]
    fn test_factory_rejects_unknown_provider() {
        let result = create_sms_gateway(&config_for("carrier-pigeon"));
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_factory_surfaces_construction_failures() {
        let mut config = config_for("solapi");
        config.base_url = "not a url".to_string();
        assert!(create_sms_gateway(&config).is_err());
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+821012345678"), "+********5678");
        assert_eq!(mask_phone_number("+1234567890"), "+******7890");
        assert_eq!(mask_phone_number("1234567890"), "******7890");
        assert_eq!(mask_phone_number("1234"), "****");
        assert_eq!(mask_phone_number("123"), "***");
        assert_eq!(mask_phone_number(""), "");
    }
}
