use anyhow::{Context, Result};
use axum::{routing::get, Extension, Router};
use config::Config;
use github_api::GithubClient;
use middleware::access_log::AccessLog;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

pub mod config;
pub mod extract;
pub mod handler;
pub mod middleware;
pub mod model;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = serve().await {
        error!("service exited with error: {e:?}");
        std::process::exit(1);
    }
}

async fn serve() -> Result<()> {
    let config = Config::from_env()?;
    info!("starting service with {config:?}");

    let app = app(GithubClient::new(&config.github_base));
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn app(github_client: GithubClient) -> Router {
    Router::new()
        .route("/repos", get(handler::repos::search_repos))
        .route("/repos/{owner}/{repo}", get(handler::repos::repo_details))
        .layer(AccessLog)
        .layer(CorsLayer::very_permissive())
        .layer(Extension(github_client))
}
