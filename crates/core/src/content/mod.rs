//! Content provisioning.
//!
//! This module turns a stored content record into a client-facing result:
//! - Content type validation
//! - Size probing (failures fall back to zero bytes)
//! - Format resolution
//! - Signed access URL generation
//! - Type-specific metadata synthesis

mod builder;
mod error;
mod format;
mod metadata;
mod service;
mod signer;
mod types;

#[cfg(test)]
mod props;

pub use builder::build_provisioned;
pub use error::ContentError;
pub use format::resolve_format;
pub use metadata::ContentMetadata;
pub use service::{ContentRepository, ProvisioningService};
pub use signer::UrlSigner;
pub use types::{ContentRecord, ContentType, ProvisionedContent};
