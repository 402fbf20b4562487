//! Solapi SMS gateway client
//!
//! Delivers messages through the Solapi message API
//! (`POST {base_url}/messages/v4/send`) with a JSON body of
//! `{"message": {"to", "from", "text"}}`. Every request carries an
//! HMAC-SHA256 authorization header derived from the API key/secret pair:
//!
//! `Authorization: HMAC-SHA256 apiKey=<key>, date=<iso8601>, salt=<nonce>, signature=<hex>`
//!
//! where `signature = hmac_sha256(api_secret, date || salt)`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use rand::{distributions::Alphanumeric, Rng};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::{debug, info};

use aegis_core::domain::value_objects::OutboundMessage;
use aegis_core::errors::GatewayError;
use aegis_core::services::dispatch::SmsGateway;

use crate::sms::mask_phone_number;
use crate::InfrastructureError;

type HmacSha256 = Hmac<Sha256>;

/// Default request timeout for gateway calls
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const SEND_PATH: &str = "/messages/v4/send";
const SALT_LENGTH: usize = 32;

/// Solapi gateway configuration
#[derive(Debug, Clone)]
pub struct SolapiConfig {
    /// API key
    pub api_key: String,
    /// API secret
    pub api_secret: String,
    /// Gateway base URL
    pub base_url: String,
    /// Timeout for gateway requests in seconds
    pub request_timeout_secs: u64,
}

/// Solapi SMS gateway handle.
///
/// Constructed once at startup and shared for the life of the process.
/// Nothing is mutated after construction, and the inner `reqwest::Client`
/// is safe for concurrent reuse.
pub struct SolapiGateway {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    api_secret: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    message: &'a OutboundMessage,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendResponse {
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    message_id: Option<String>,
}

impl SolapiGateway {
    /// Construct the gateway handle, validating the base URL eagerly so a
    /// malformed configuration fails at startup rather than at send time.
    pub fn new(config: SolapiConfig) -> Result<Self, InfrastructureError> {
        let endpoint = Url::parse(&config.base_url)
            .and_then(|base| base.join(SEND_PATH))
            .map_err(|e| {
                InfrastructureError::Config(format!(
                    "invalid gateway base URL '{}': {}",
                    config.base_url, e
                ))
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(endpoint = %endpoint, "Solapi gateway initialized");

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key,
            api_secret: config.api_secret,
        })
    }

    /// Build the `Authorization` header value for one request.
    ///
    /// The salt is freshly drawn per request; Solapi rejects reused
    /// (date, salt) pairs.
    fn authorization_header(&self) -> Result<String, GatewayError> {
        let date = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let salt: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SALT_LENGTH)
            .map(char::from)
            .collect();

        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .map_err(GatewayError::transport)?;
        mac.update(date.as_bytes());
        mac.update(salt.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        Ok(format!(
            "HMAC-SHA256 apiKey={}, date={}, salt={}, signature={}",
            self.api_key, date, salt, signature
        ))
    }
}

#[async_trait]
impl SmsGateway for SolapiGateway {
    async fn send(&self, message: &OutboundMessage) -> Result<String, GatewayError> {
        let authorization = self.authorization_header()?;

        debug!(
            to = %mask_phone_number(&message.to),
            "submitting message to Solapi"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(&SendRequest { message })
            .send()
            .await
            .map_err(GatewayError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::rejected(status.to_string(), body));
        }

        // A 2xx with an unparseable body still counts as an accepted send;
        // the id is only used for logging.
        let body: SendResponse = response.json().await.unwrap_or_default();
        let message_id = body
            .message_id
            .or(body.group_id)
            .unwrap_or_else(|| "unknown".to_string());

        info!(
            to = %mask_phone_number(&message.to),
            message_id = %message_id,
            "message accepted by Solapi"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Solapi"
    }
}
