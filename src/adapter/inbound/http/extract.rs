//! Request extractors that reject with the API's error body.

use std::str::FromStr;

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::domain::error::DomainError;

/// JSON body extractor. Any rejection (bad syntax, wrong types, unknown
/// fields, missing content type) becomes a 400 `{erro}` response.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(format!(
                    "Corpo da requisição inválido: {}",
                    rejection.body_text()
                ))
            })?;
        Ok(Self(value))
    }
}

/// Path parameter extractor. Segments that cannot be decoded (invalid
/// percent-encoding, non UTF-8 bytes) become a 400 `{erro}` response.
#[derive(Debug)]
pub struct PathParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(format!(
                    "Parâmetro de rota inválido: {}",
                    rejection.body_text()
                ))
            })?;
        Ok(Self(value))
    }
}

/// Parse a raw path segment into a domain identifier.
pub fn parse_id<T>(raw: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    raw.parse()
        .map_err(|e: DomainError| ApiError::Validation(e.to_string()))
}
