//! Example wiring the code dispatcher to a gateway selected from the
//! environment.
//!
//! Run with the default mock provider:
//!
//! ```sh
//! cargo run --example send_code_demo -- +821012345678
//! ```
//!
//! or against the real gateway by exporting `SMS_PROVIDER=solapi` together
//! with `SMS_API_KEY`, `SMS_API_SECRET` and `SMS_FROM_NUMBER`.

use aegis_core::services::dispatch::{CodeDispatcher, DispatchConfig};
use aegis_infra::{create_sms_gateway, SmsConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Explicit construction: configuration -> gateway handle -> dispatcher
    let config = SmsConfig::from_env()?;
    let gateway = create_sms_gateway(&config)?;
    let dispatcher = CodeDispatcher::new(gateway, DispatchConfig::new(config.from_number.clone()));

    let destination = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "+821012345678".to_string());

    match dispatcher.send_code(&destination).await {
        Ok(code) => println!("✓ verification code sent to {}: {}", destination, code),
        Err(e) => println!("✗ send failed: {}", e),
    }

    Ok(())
}
