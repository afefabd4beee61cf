//! API error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use curio_core::content::ContentError;
use curio_shared::AppError;

/// Error returned by route handlers, rendered as a JSON body.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(ContentError::InvalidInput(String::new()), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(ContentError::not_found("1"), StatusCode::NOT_FOUND)]
    #[case(ContentError::invalid_request(Some("AUDIO")), StatusCode::BAD_REQUEST)]
    #[case(ContentError::UnsupportedMetadataType("AUDIO".into()), StatusCode::BAD_REQUEST)]
    #[case(ContentError::repository("down"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_content_error_status(#[case] err: ContentError, #[case] status: StatusCode) {
        assert_eq!(ApiError::from(err).into_response().status(), status);
    }

    #[tokio::test]
    async fn test_error_body() {
        let response = ApiError::from(ContentError::not_found("42")).into_response();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["error"], "NOT_FOUND");
        assert_eq!(value["message"], "Not found: content not found: 42");
    }
}
