//! Content provisioning routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tracing::{error, info, warn};

use crate::{AppState, error::ApiError};
use curio_core::content::{ContentError, ProvisionedContent, ProvisioningService};
use curio_db::ContentRepository;

/// Creates the content routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/contents/{content_id}/provision", get(provision_content))
}

/// GET `/contents/{content_id}/provision`
/// Provision a content item: signed URL, format and type-specific metadata.
async fn provision_content(
    State(state): State<AppState>,
    Path(content_id): Path<String>,
) -> Result<Json<ProvisionedContent>, ApiError> {
    let repo = ContentRepository::new((*state.db).clone());
    let service = ProvisioningService::new(Arc::new(repo), state.storage.clone(), state.signer);

    match service.provision(&content_id).await {
        Ok(provisioned) => {
            info!(
                content_id = %provisioned.id,
                content_type = %provisioned.content_type,
                bytes = provisioned.bytes,
                "Content provisioned"
            );
            Ok(Json(provisioned))
        }
        Err(e) => {
            match &e {
                ContentError::NotFound(_) | ContentError::InvalidInput(_) => {
                    warn!(content_id = %content_id, error = %e, "Provisioning rejected");
                }
                _ => error!(content_id = %content_id, error = %e, "Failed to provision content"),
            }
            Err(e.into())
        }
    }
}
