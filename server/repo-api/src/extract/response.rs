use std::fmt::Debug;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json; charset=utf-8");

/// JSON body sent with status 200.
#[derive(Debug)]
pub struct BodyResponse<T>(pub T)
where
    T: Debug + Serialize;

impl<T> IntoResponse for BodyResponse<T>
where
    T: Debug + Serialize,
{
    fn into_response(self) -> Response {
        debug!("Response: {:?}", self.0);

        let body = match serde_json::to_string(&self.0) {
            Ok(body) => body,
            Err(e) => {
                error!("failed to serialize response: {e:?}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        let mut response = Response::new(body.into());
        *response.status_mut() = StatusCode::OK;
        response.headers_mut().insert(CONTENT_TYPE, APPLICATION_JSON);
        response
    }
}
