use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::TodoError;

/// Upper bound for request bodies (1 MiB).
pub const MAX_BODY_BYTES: usize = 1 << 20;

/// JSON body extractor that ignores `content-type` and reports every failure,
/// including a body over the cap, as [`TodoError::InvalidJson`].
///
/// The size cap comes from the router's `DefaultBodyLimit` layer.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = TodoError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // an oversized body is cut off at the cap and so cannot decode
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() != StatusCode::PAYLOAD_TOO_LARGE {
                warn!(error = %rejection, "failed to buffer request body");
            }
            TodoError::InvalidJson
        })?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|_| TodoError::InvalidJson)
    }
}
