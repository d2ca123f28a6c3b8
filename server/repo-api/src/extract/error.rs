use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use github_api::GithubError;
use serde::Serialize;

use super::response::BodyResponse;

pub enum AppError {
    BadRequest(String),
    Github(GithubError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status_code: u16,
    pub detail: String,
}

impl From<GithubError> for AppError {
    fn from(value: GithubError) -> Self {
        Self::Github(value)
    }
}

impl AppError {
    fn into_error_body(self) -> ErrorBody {
        match self {
            AppError::BadRequest(detail) => ErrorBody {
                status_code: StatusCode::BAD_REQUEST.as_u16(),
                detail,
            },
            AppError::Github(error) => ErrorBody {
                status_code: error.status_code(),
                detail: error.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = self.into_error_body();
        // upstream may hand back anything, fall back to 500 for unusable codes
        let status =
            StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = BodyResponse(body).into_response();
        *response.status_mut() = status;
        response
    }
}
