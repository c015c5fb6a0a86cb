use axum::http::{HeaderMap, HeaderValue};
use reqwest::header;

use crate::articles::{ArticleDetail, ArticleSummary};
use crate::error::Result;

use super::ArticleFeed;

/// dev.to 公开 API 的默认地址。
pub const DEVTO_API_BASE: &str = "https://dev.to/api";

/// 基于 dev.to（Forem）HTTP API 的文章数据源。
#[derive(Clone)]
pub struct DevtoFeed {
    client: reqwest::Client,
    base_url: String,
}

impl Default for DevtoFeed {
    fn default() -> Self {
        Self::new(DEVTO_API_BASE)
    }
}

impl DevtoFeed {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .default_headers({
                let mut headers = HeaderMap::new();
                headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
                headers
            })
            .build()
            .unwrap();

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl ArticleFeed for DevtoFeed {
    async fn list_articles(&self) -> Result<Vec<ArticleSummary>> {
        let resp = self
            .client
            .get(format!("{}/articles", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json().await?)
    }

    async fn fetch_article(&self, id: u32) -> Result<ArticleDetail> {
        let resp = self
            .client
            .get(format!("{}/articles/{}", self.base_url, id))
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json().await?)
    }
}
