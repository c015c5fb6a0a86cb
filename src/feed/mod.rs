mod devto;

pub use self::devto::{DEVTO_API_BASE, DevtoFeed};

use crate::{
    articles::{ArticleDetail, ArticleSummary},
    error::Result,
};

/// 文章数据源。
///
/// 抽象上游内容 API；测试中以内存实现替换。
pub trait ArticleFeed: Send + Sync {
    /// 拉取完整的文章摘要集合。单次请求，不分页。
    fn list_articles(&self) -> impl Future<Output = Result<Vec<ArticleSummary>>> + Send;

    /// 按标识符拉取单篇文章详情。
    ///
    /// 上游返回非成功状态码时为错误，由调用方折叠为未找到。
    fn fetch_article(&self, id: u32) -> impl Future<Output = Result<ArticleDetail>> + Send;
}
