pub mod api;
pub mod error;
pub mod model;

pub use api::GithubClient;
pub use error::GithubError;
