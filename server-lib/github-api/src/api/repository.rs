use crate::{
    error::GithubError,
    model::{Repository, RepositoryDetail},
};

use super::{check_status, decode_body, GithubClient};

impl GithubClient {
    pub async fn get_repository_details(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<RepositoryDetail, GithubError> {
        if owner.trim().is_empty() {
            return Err(GithubError::InvalidArgument("Owner cannot be empty"));
        }
        if repo.trim().is_empty() {
            return Err(GithubError::InvalidArgument("Repository name cannot be empty"));
        }

        tracing::info!("[Github API] get_repository_details, owner={owner}, repo={repo}");
        let resp = self.get(&format!("/repos/{owner}/{repo}")).send().await?;
        let resp = check_status(resp, "No repository found").await?;

        let repository: Repository = decode_body(resp, "get_repository_details").await?;
        Ok(repository.into())
    }
}
