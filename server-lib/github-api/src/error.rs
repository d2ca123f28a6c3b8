use thiserror::Error;

/// Outcome of a failed repository lookup.
///
/// Every variant is terminal for the request and maps to exactly one HTTP
/// status, see [`GithubError::status_code`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GithubError {
    /// Caller input was rejected before any upstream call.
    #[error("{0}")]
    InvalidArgument(&'static str),
    /// Upstream answered 404.
    #[error("{0}")]
    NotFound(&'static str),
    /// Upstream answered 429.
    #[error("Rate limit exceeded")]
    RateLimited,
    /// Any other non-200 upstream answer, body kept verbatim.
    #[error("{body}")]
    Upstream { status: u16, body: String },
    /// Transport failure, or a 200 body that does not decode.
    #[error("{0}")]
    Internal(String),
}

impl GithubError {
    pub fn status_code(&self) -> u16 {
        match self {
            GithubError::InvalidArgument(_) => 400,
            GithubError::NotFound(_) => 404,
            GithubError::RateLimited => 429,
            GithubError::Upstream { status, .. } => *status,
            GithubError::Internal(_) => 500,
        }
    }
}

impl From<reqwest::Error> for GithubError {
    fn from(value: reqwest::Error) -> Self {
        Self::Internal(value.to_string())
    }
}

impl From<serde_json::Error> for GithubError {
    fn from(value: serde_json::Error) -> Self {
        Self::Internal(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_status_code_and_detail() {
        let cases = [
            (GithubError::InvalidArgument("Owner cannot be empty"), 400, "Owner cannot be empty"),
            (GithubError::NotFound("No repository found"), 404, "No repository found"),
            (GithubError::RateLimited, 429, "Rate limit exceeded"),
            (
                GithubError::Upstream {
                    status: 503,
                    body: "upstream down".to_string(),
                },
                503,
                "upstream down",
            ),
            (GithubError::Internal("missing field `name`".to_string()), 500, "missing field `name`"),
        ];

        for (error, status, detail) in cases {
            assert_eq!(error.status_code(), status);
            assert_eq!(error.to_string(), detail);
        }
    }

    #[test]
    pub fn test_decode_error_becomes_internal() {
        let error = serde_json::from_str::<u64>("\"nope\"").unwrap_err();
        let error = GithubError::from(error);

        assert!(matches!(error, GithubError::Internal(_)));
        assert_eq!(error.status_code(), 500);
    }
}
