use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchReposRequest {
    // missing and empty are rejected the same way downstream
    #[serde(default)]
    pub query: String,
    #[serde(default = "super::default_per_page")]
    pub per_page: i64,
}

#[derive(Debug, Deserialize)]
pub struct RepoDetailsPath {
    pub owner: String,
    pub repo: String,
}
