use thiserror::Error;
use tower_api_client::{Error as ApiError, StatusCode};

/// Errors returned by the catalog client
///
/// The catalog service does not document an error body, so non-success
/// responses keep the raw body text alongside the status.
#[derive(Error, Debug)]
pub enum CatalogApiError {
    #[error("({0}) catalog request failed: {1}")]
    Http(StatusCode, String),

    #[error("Internal error: {0}")]
    Internal(ApiError),
}

impl From<ApiError> for CatalogApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                CatalogApiError::Http(status, detail)
            }
            e => CatalogApiError::Internal(e),
        }
    }
}
