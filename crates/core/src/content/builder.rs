//! Assembly of provisioned content from a stored record.

use super::error::ContentError;
use super::format::resolve_format;
use super::metadata::ContentMetadata;
use super::signer::UrlSigner;
use super::types::{ContentRecord, ProvisionedContent};

/// Build the client-facing representation of a record.
///
/// `bytes` is the already-probed size of the underlying file.
///
/// # Errors
///
/// Returns `UnsupportedMetadataType` if the record's type is absent or unknown.
pub fn build_provisioned(
    record: &ContentRecord,
    bytes: u64,
    signer: &UrlSigner,
) -> Result<ProvisionedContent, ContentError> {
    let location = record.url.as_deref();
    let metadata = ContentMetadata::synthesize_raw(record.content_type.as_deref(), bytes, location)?;
    let content_type = metadata.content_type();

    Ok(ProvisionedContent {
        id: record.id.clone(),
        title: record.title.clone(),
        cover: record.cover.clone(),
        created_at: record.created_at,
        description: record.description.clone(),
        total_likes: record.total_likes,
        content_type,
        url: signer.sign(location.unwrap_or_default()),
        allow_download: content_type.allows_download(),
        is_embeddable: content_type.is_embeddable(),
        format: resolve_format(content_type, location),
        bytes,
        metadata,
    })
}
