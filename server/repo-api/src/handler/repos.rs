use axum::Extension;
use github_api::{
    model::{RepositoryDetail, SearchResultItem},
    GithubClient,
};

use crate::{
    extract::{
        error::AppError,
        request::{PathRequest, QueryRequest},
        response::BodyResponse,
    },
    model::repos::{RepoDetailsPath, SearchReposRequest},
};

#[axum::debug_handler]
pub async fn search_repos(
    Extension(github_client): Extension<GithubClient>,
    QueryRequest(req): QueryRequest<SearchReposRequest>,
) -> Result<BodyResponse<Vec<SearchResultItem>>, AppError> {
    let repos = github_client
        .search_repositories(&req.query, req.per_page)
        .await?;

    Ok(BodyResponse(repos))
}

#[axum::debug_handler]
pub async fn repo_details(
    Extension(github_client): Extension<GithubClient>,
    PathRequest(path): PathRequest<RepoDetailsPath>,
) -> Result<BodyResponse<RepositoryDetail>, AppError> {
    let detail = github_client
        .get_repository_details(&path.owner, &path.repo)
        .await?;

    Ok(BodyResponse(detail))
}
