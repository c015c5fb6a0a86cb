use crate::{articles::ArticleDetail, error::Result};

/// 单篇文章视图的状态。
#[derive(Debug, Default)]
pub enum DetailState {
    /// 尚未发起任何导航。
    #[default]
    Idle,
    /// 请求在途。
    Loading { id: u32 },
    /// 终态：渲染完整文章。
    Loaded(ArticleDetail),
    /// 终态：上游失败或文章不存在。
    NotFound { id: u32 },
}

/// 一次导航对应的请求凭据。
#[derive(Debug)]
pub struct FetchToken {
    id: u32,
    generation: u64,
}

/// 单次请求自身的终态。
///
/// 上游的网络失败与非成功状态码统一折叠为 [`DetailOutcome::NotFound`]，
/// 不存在部分成功。
#[derive(Debug)]
pub enum DetailOutcome {
    Loaded(ArticleDetail),
    NotFound,
}

/// 文章详情视图。
///
/// 每次导航携带递增的代号，只有代号仍为当前值的结果才会更新视图，
/// 迟到的过期响应不会覆盖更新的导航。
#[derive(Debug, Default)]
pub struct DetailView {
    state: DetailState,
    generation: u64,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 导航到指定文章，进入加载状态并签发请求凭据。
    pub fn navigate(&mut self, id: u32) -> FetchToken {
        self.generation += 1;
        self.state = DetailState::Loading { id };

        FetchToken {
            id,
            generation: self.generation,
        }
    }

    /// 以请求结果完成一次导航。
    ///
    /// 总是返回该请求自身的终态；仅当凭据仍为当前导航时更新视图状态，
    /// 过期凭据对应的响应只被返回、不被记录。
    pub fn complete(&mut self, token: FetchToken, result: Result<ArticleDetail>) -> DetailOutcome {
        let outcome = match result {
            Ok(article) => DetailOutcome::Loaded(article),
            Err(e) => {
                tracing::debug!(id = token.id, %e, "detail fetch resolved to not found");
                DetailOutcome::NotFound
            }
        };

        if token.generation != self.generation {
            tracing::debug!(id = token.id, "discarding stale detail response");
            return outcome;
        }

        self.state = match &outcome {
            DetailOutcome::Loaded(article) => DetailState::Loaded(article.clone()),
            DetailOutcome::NotFound => DetailState::NotFound { id: token.id },
        };

        outcome
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }
}
