//! SMS configuration loaded from the environment.

use crate::InfrastructureError;

/// Default Solapi API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.solapi.com";

/// SMS service configuration.
///
/// Loaded once at startup and handed to
/// [`create_sms_gateway`](crate::sms::create_sms_gateway) and the
/// dispatcher constructor explicitly. Nothing reads the environment after
/// this point.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// SMS service provider ("solapi", "mock")
    pub provider: String,
    /// API key credential
    pub api_key: String,
    /// API secret credential
    pub api_secret: String,
    /// Gateway base URL
    pub base_url: String,
    /// Sender number for outbound messages
    pub from_number: String,
}

impl SmsConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `SMS_PROVIDER`, `SMS_API_KEY`, `SMS_API_SECRET`, `SMS_BASE_URL`
    /// and `SMS_FROM_NUMBER`, loading a `.env` file first if one is present.
    /// Credentials and the sender number are required only for the `solapi`
    /// provider; the mock provider falls back to placeholder values.
    pub fn from_env() -> Result<Self, InfrastructureError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string());

        let require = |key: &str| {
            std::env::var(key)
                .map_err(|_| InfrastructureError::Config(format!("{} not set", key)))
        };

        let (api_key, api_secret, from_number) = if provider == "solapi" {
            (
                require("SMS_API_KEY")?,
                require("SMS_API_SECRET")?,
                require("SMS_FROM_NUMBER")?,
            )
        } else {
            (
                std::env::var("SMS_API_KEY").unwrap_or_default(),
                std::env::var("SMS_API_SECRET").unwrap_or_default(),
                std::env::var("SMS_FROM_NUMBER")
                    .unwrap_or_else(|_| "+15550000000".to_string()),
            )
        };

        Ok(Self {
            provider,
            api_key,
            api_secret,
            base_url: std::env::var("SMS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            from_number,
        })
    }
}
