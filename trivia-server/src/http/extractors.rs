//! Custom Axum extractors
//!
//! Rejections from the stock extractors render as plain text; these wrap
//! them so every failure uses the JSON error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Integer id from the path. Anything else is a 404, as if the route
/// did not match at all.
pub struct IntId(pub i32);

impl<S> FromRequestParts<S> for IntId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("route", parts.uri.path()))?;

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| ApiError::not_found("route", parts.uri.path()))
    }
}

/// JSON body whose rejections become 400 envelopes.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}
