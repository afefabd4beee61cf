//! Shared errors and configuration for Curio.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, ProvisioningConfig, StorageProvider};
pub use error::AppError;
