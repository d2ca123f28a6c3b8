use std::fmt::Debug;

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::AppError;

/// Query string extractor whose rejection uses the `{status_code, detail}` body.
#[derive(Debug)]
pub struct QueryRequest<T>(pub T)
where
    T: Debug + DeserializeOwned;

impl<T, S> FromRequestParts<S> for QueryRequest<T>
where
    T: Debug + DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(QueryRequest(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Path parameter extractor, same rejection shape as [`QueryRequest`].
#[derive(Debug)]
pub struct PathRequest<T>(pub T)
where
    T: Debug + DeserializeOwned + Send;

impl<T, S> FromRequestParts<S> for PathRequest<T>
where
    T: Debug + DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathRequest(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
