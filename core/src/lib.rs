//! # Aegis Core
//!
//! Core business logic and domain layer for the Aegis SMS verification
//! service. This crate contains the verification code entity, the outbound
//! message value object, the dispatch service with its gateway port, and the
//! error types that form the foundation of the service.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
