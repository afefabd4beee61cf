//! Content size probing backed by Apache OpenDAL.
//!
//! Supported providers:
//! - Local filesystem (default)
//! - S3-compatible: Cloudflare R2, Supabase Storage, AWS S3, DigitalOcean Spaces
//! - Azure Blob Storage
//!
//! Only `stat` is used; this module never reads, writes or deletes objects.

mod error;
mod service;

pub use error::StorageError;
pub use service::{SizeProbe, StorageService};
