//! Clients and data models for provisioning FIWARE actuators.
//!
//! [`IotAgentClient`] manages service groups and devices in the IoT Agent,
//! [`OrionClient`] reads entities and manages subscriptions in the Orion
//! Context Broker. Every call is a single blocking HTTP request; failed
//! statuses come back as [`IotAgentError`] / [`OrionError`].

pub mod clients;
pub mod config;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod interfaces;
pub mod models;
pub mod provision;

pub use clients::{IotAgentClient, OrionClient};
pub use config::{ClientConfig, ConfigError, Settings};
pub use error::{IotAgentError, OrionError};
