use crate::{articles::ArticleSummary, search};

/// 查询变更后客户端需要展示的过渡加载时长（毫秒），随列表响应下发。
pub const SEARCH_SETTLE_MS: u64 = 500;

/// 文章集合的加载状态。
///
/// 加载失败是显式状态，区别于加载成功但集合为空。
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Vec<ArticleSummary>),
    Failed,
}

/// 一次集合加载的凭据。
///
/// 由 [`ListView::begin_load`] 签发；期间若有更新的加载开始，
/// 持过期凭据的结果会被丢弃。
#[derive(Debug)]
pub struct LoadToken {
    generation: u64,
}

/// 列表 / 搜索视图。
///
/// 持有一次加载得到的文章集合与当前查询串，
/// [`ListView::outcome`] 给出应当渲染的视图状态。
#[derive(Debug, Default)]
pub struct ListView {
    state: LoadState,
    query: String,
    generation: u64,
}

/// 列表视图的渲染结果。
#[derive(Debug)]
pub enum ListOutcome<'a> {
    Loading,
    Failed,
    NoResults,
    Articles(Vec<&'a ArticleSummary>),
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始一次加载并签发凭据。
    ///
    /// 已有的集合保持可用，直到新的结果到达。
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;

        LoadToken {
            generation: self.generation,
        }
    }

    /// 以拉取到的集合完成一次加载。
    ///
    /// 凭据过期时结果被丢弃并返回 `false`。
    pub fn complete_load(&mut self, token: LoadToken, articles: Vec<ArticleSummary>) -> bool {
        if !self.accepts(&token) {
            return false;
        }

        self.state = LoadState::Ready(articles);
        true
    }

    /// 将一次加载标记为失败。
    ///
    /// 凭据过期时同样被丢弃，不会覆盖更新的加载结果。
    pub fn fail_load(&mut self, token: LoadToken) -> bool {
        if !self.accepts(&token) {
            return false;
        }

        self.state = LoadState::Failed;
        true
    }

    /// 设置当前查询串。
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// 当前应渲染的视图状态。
    ///
    /// 过滤结果为空时给出显式的 [`ListOutcome::NoResults`]，
    /// 而非空列表；加载失败给出 [`ListOutcome::Failed`]。
    pub fn outcome(&self) -> ListOutcome<'_> {
        match &self.state {
            LoadState::Loading => ListOutcome::Loading,
            LoadState::Failed => ListOutcome::Failed,
            LoadState::Ready(articles) => {
                let matched = search::filter(articles, &self.query);

                if matched.is_empty() {
                    ListOutcome::NoResults
                } else {
                    ListOutcome::Articles(matched)
                }
            }
        }
    }

    /// 已加载集合中的所有标签，去重排序。集合未就绪时为空。
    pub fn tags(&self) -> Vec<String> {
        let LoadState::Ready(articles) = &self.state else {
            return Vec::new();
        };

        let mut tags: Vec<String> = articles
            .iter()
            .flat_map(|article| article.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    fn accepts(&self, token: &LoadToken) -> bool {
        if token.generation != self.generation {
            tracing::debug!(
                stale = token.generation,
                current = self.generation,
                "discarding stale list load"
            );
            return false;
        }
        true
    }
}
