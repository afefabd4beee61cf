//! Content provisioning service implementation.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::builder::build_provisioned;
use super::error::ContentError;
use super::signer::UrlSigner;
use super::types::{ContentRecord, ProvisionedContent};
use crate::storage::SizeProbe;

/// Repository trait for content lookup.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait ContentRepository: Send + Sync {
    /// Find content by ID.
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<ContentRecord>, ContentError>> + Send;
}

/// Provisioning service: turns a content ID into a client-facing result.
pub struct ProvisioningService<R: ContentRepository, P: SizeProbe> {
    repo: Arc<R>,
    probe: Arc<P>,
    signer: UrlSigner,
}

impl<R: ContentRepository, P: SizeProbe> ProvisioningService<R, P> {
    /// Create a new provisioning service.
    #[must_use]
    pub fn new(repo: Arc<R>, probe: Arc<P>, signer: UrlSigner) -> Self {
        Self {
            repo,
            probe,
            signer,
        }
    }

    /// Provision a content item.
    ///
    /// Looks up the record, validates its type, probes the file size and
    /// assembles the signed, type-specific result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `content_id` is empty
    /// - No record exists, or the lookup fails
    /// - The stored content type is absent or unknown
    pub async fn provision(&self, content_id: &str) -> Result<ProvisionedContent, ContentError> {
        if content_id.trim().is_empty() {
            error!(content_id, "Invalid content ID");
            return Err(ContentError::InvalidInput(content_id.to_string()));
        }

        info!(content_id, "Provisioning content");

        let record = match self.repo.find_by_id(content_id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                warn!(content_id, "Content not found");
                return Err(ContentError::not_found(content_id));
            }
            Err(e) => {
                error!(content_id, error = %e, "Failed to fetch content");
                return Err(ContentError::not_found(content_id));
            }
        };

        if record.parsed_type().is_none() {
            warn!(
                content_id,
                content_type = record.content_type.as_deref().unwrap_or("<none>"),
                "Unsupported content type"
            );
            return Err(ContentError::invalid_request(record.content_type.as_deref()));
        }

        let bytes = self.probe_size(record.url.as_deref()).await;
        let provisioned = build_provisioned(&record, bytes, &self.signer)?;

        debug!(
            content_id,
            content_type = %provisioned.content_type,
            bytes,
            "Content provisioned"
        );
        Ok(provisioned)
    }

    /// Size of the file behind `location`; 0 when absent or unreadable.
    async fn probe_size(&self, location: Option<&str>) -> u64 {
        let Some(location) = location.filter(|l| !l.is_empty()) else {
            return 0;
        };

        match self.probe.size_of(location).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(location, error = %e, "Failed to probe content size");
                0
            }
        }
    }
}
