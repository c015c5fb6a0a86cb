use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::Query;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::articles::{self, ArticleDetail, ArticleSummary};
use crate::error::{ApiError, Result};
use crate::feed::ArticleFeed;
use crate::state::{AppState, ListHandle};
use crate::view::{DetailOutcome, ListOutcome, SEARCH_SETTLE_MS};

/// 配置视图相关路由。
///
/// 路由包括：
/// - `GET /articles`：列表 / 搜索视图
/// - `GET /articles/{id}`：文章详情视图
/// - `GET /tags`：已加载集合中的所有标签
/// - `POST /refresh`：重新拉取文章集合
pub fn setup_route<F>() -> Router<AppState<F>>
where
    F: ArticleFeed + Clone + 'static,
{
    Router::new()
        .route("/articles", get(articles_list))
        .route("/articles/{id}", get(article::<F>))
        .route("/tags", get(tag_list))
        .route("/refresh", post(refresh::<F>))
}

/// 文章卡片，列表视图的单项。
#[derive(Debug, Serialize)]
pub struct ArticleCard {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    /// 渲染用的日期文本，如 `Jun 1, 2024`。
    pub published: String,
    pub tags: Vec<String>,
    pub reactions_count: u32,
    pub author: CardAuthor,
}

#[derive(Debug, Serialize)]
pub struct CardAuthor {
    pub name: String,
    pub avatar: String,
}

/// 列表视图的完整响应。
#[derive(Debug, Serialize)]
pub struct ListPage {
    /// 查询变更后客户端应展示的过渡加载时长（毫秒）。
    pub settle_ms: u64,
    pub query: String,
    #[serde(flatten)]
    pub body: ListBody,
}

/// 列表视图的状态。
///
/// 加载失败显式区别于过滤结果为空。
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ListBody {
    Loading,
    Failed,
    NoResults,
    Ready { articles: Vec<ArticleCard> },
}

/// 完整文章视图，包括正文与作者档案。
#[derive(Debug, Serialize)]
pub struct ArticlePage {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub body_html: String,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    /// 渲染用的日期文本，原始时间戳在 `created_at` 中原样下发。
    pub published: String,
    pub tags: Vec<String>,
    pub canonical_url: String,
    pub comments_count: u32,
    pub public_reactions_count: u32,
    pub positive_reactions_count: u32,
    pub reading_time_minutes: u32,
    pub author: ProfileAuthor,
}

#[derive(Debug, Serialize)]
pub struct ProfileAuthor {
    pub name: String,
    pub avatar: String,
    pub twitter_username: Option<String>,
    pub github_username: Option<String>,
    pub website_url: Option<String>,
}

impl ArticleCard {
    fn from_summary(article: &ArticleSummary) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            description: article.description.clone(),
            cover_image: article.cover_image.clone(),
            created_at: article.created_at,
            published: articles::display_date(&article.created_at),
            tags: article.tags.clone(),
            reactions_count: article.reactions_count,
            author: CardAuthor {
                name: article.author.name.clone(),
                avatar: article.author.avatar.clone(),
            },
        }
    }
}

impl ArticlePage {
    fn from_detail(article: ArticleDetail) -> Self {
        Self {
            published: articles::display_date(&article.created_at),
            id: article.id,
            title: article.title,
            description: article.description,
            body_html: article.body_html,
            cover_image: article.cover_image,
            created_at: article.created_at,
            tags: article.tags,
            canonical_url: article.canonical_url,
            comments_count: article.comments_count,
            public_reactions_count: article.public_reactions_count,
            positive_reactions_count: article.positive_reactions_count,
            reading_time_minutes: article.reading_time_minutes,
            author: ProfileAuthor {
                name: article.author.name,
                avatar: article.author.avatar,
                twitter_username: article.author.twitter_username,
                github_username: article.author.github_username,
                website_url: article.author.website_url,
            },
        }
    }
}

/// 查询参数。`q` 为自由文本查询串，空串返回全集。
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    q: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self { q: String::new() }
    }
}

/// 列表 / 搜索视图。
///
/// 记录查询串并返回当前应渲染的视图状态：初始加载未完成时为
/// `loading`，加载失败为 `failed`，过滤结果为空时为 `no_results`。
async fn articles_list(
    Query(params): Query<QueryParams>,
    State(list): State<ListHandle>,
) -> Json<ListPage> {
    let mut view = list.write().unwrap();
    view.set_query(params.q);

    let body = match view.outcome() {
        ListOutcome::Loading => ListBody::Loading,
        ListOutcome::Failed => ListBody::Failed,
        ListOutcome::NoResults => ListBody::NoResults,
        ListOutcome::Articles(matched) => ListBody::Ready {
            articles: matched.into_iter().map(ArticleCard::from_summary).collect(),
        },
    };

    Json(ListPage {
        settle_ms: SEARCH_SETTLE_MS,
        query: view.query().to_string(),
        body,
    })
}

/// 文章详情视图。
///
/// 对阅读视图执行一次导航；上游的任何失败（网络错误或非成功状态码）
/// 都折叠为 [`ApiError::NotFound`]，迟到的过期响应不会覆盖更新的导航。
async fn article<F>(
    Path(id): Path<u32>,
    State(state): State<AppState<F>>,
) -> Result<Json<ArticlePage>>
where
    F: ArticleFeed + Clone + 'static,
{
    let token = state.reader().lock().unwrap().navigate(id);

    let result = state.feed().fetch_article(id).await;

    let outcome = state.reader().lock().unwrap().complete(token, result);
    match outcome {
        DetailOutcome::Loaded(article) => Ok(Json(ArticlePage::from_detail(article))),
        DetailOutcome::NotFound => Err(ApiError::NotFound.into()),
    }
}

/// 已加载集合中的所有文章标签。
///
/// 返回去重排序后的标签列表；集合尚未就绪时为空。
async fn tag_list(State(list): State<ListHandle>) -> Json<Vec<String>> {
    Json(list.read().unwrap().tags())
}

#[derive(Debug, Serialize)]
pub struct RefreshResult {
    pub count: usize,
}

/// 重新拉取文章集合。
///
/// 拉取在请求内完成，上游失败以 `502` 返回；
/// 期间若有更新的加载开始，本次结果会被静默丢弃。
async fn refresh<F>(State(state): State<AppState<F>>) -> Result<Json<RefreshResult>>
where
    F: ArticleFeed + Clone + 'static,
{
    let count = state.reload().await?;

    Ok(Json(RefreshResult { count }))
}
