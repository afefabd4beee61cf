//! Core provisioning logic for Curio.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `content` - Content records, metadata synthesis, URL signing and provisioning
//! - `storage` - Vendor-agnostic size probing of stored content

pub mod content;
pub mod storage;
