pub mod api;
pub mod articles;
pub mod error;
pub mod feed;
pub mod search;
pub mod state;
pub mod view;

use std::env;

use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

use crate::{feed::DevtoFeed, state::AppState};

pub async fn run() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_env_filter(EnvFilter::from_env("DEVLENS_LOG"))
        .init();

    let state = AppState::new(DevtoFeed::new(feed_base_url()));

    // 视图挂载时的一次性集合拉取
    {
        let state = state.clone();
        tokio::spawn(async move {
            match state.reload().await {
                Ok(count) => tracing::info!(count, "article list loaded"),
                Err(e) => tracing::error!(%e, "article list load failed"),
            }
        });
    }

    api::run_server(state).await
}

fn feed_base_url() -> String {
    env::var("DEVLENS_FEED_URL").unwrap_or_else(|_| feed::DEVTO_API_BASE.to_string())
}
