use crate::{
    error::GithubError,
    model::{SearchRepositoriesResponse, SearchResultItem},
};

use super::{check_status, decode_body, GithubClient};

const MIN_PER_PAGE: i64 = 1;
const MAX_PER_PAGE: i64 = 100;

impl GithubClient {
    /// Searches repositories, returning at most one page of `per_page` results
    /// in upstream order.
    pub async fn search_repositories(
        &self,
        query: &str,
        per_page: i64,
    ) -> Result<Vec<SearchResultItem>, GithubError> {
        if query.trim().is_empty() {
            return Err(GithubError::InvalidArgument("Search query cannot be empty"));
        }

        if !(MIN_PER_PAGE..=MAX_PER_PAGE).contains(&per_page) {
            return Err(GithubError::InvalidArgument(
                "per_page must be between 1 and 100",
            ));
        }

        tracing::info!("[Github API] search_repositories, query={query}, per_page={per_page}");
        let resp = self
            .get("/search/repositories")
            .query(&[("q", query.to_string()), ("per_page", per_page.to_string())])
            .send()
            .await?;
        let resp = check_status(resp, "No repositories found").await?;

        let search: SearchRepositoriesResponse = decode_body(resp, "search_repositories").await?;
        Ok(search.items.into_iter().map(SearchResultItem::from).collect())
    }
}
