use std::sync::{Arc, Mutex, RwLock};

use axum::extract::FromRef;

use crate::{
    error::Result,
    feed::ArticleFeed,
    view::{DetailView, ListView},
};

/// 列表视图的共享句柄
pub type ListHandle = Arc<RwLock<ListView>>;

/// 阅读（详情）视图的共享句柄
pub type ReaderHandle = Arc<Mutex<DetailView>>;

/// 应用程序上下文
///
/// [`AppState`] 封装了上游数据源与两个视图的共享状态，提供统一访问入口。
/// 对数据源保持泛型，测试中以内存实现替换。
#[derive(Clone)]
pub struct AppState<F> {
    feed: F,
    list: ListHandle,
    reader: ReaderHandle,
}

impl<F> FromRef<AppState<F>> for ListHandle {
    fn from_ref(state: &AppState<F>) -> Self {
        state.list.clone()
    }
}

impl<F> FromRef<AppState<F>> for ReaderHandle {
    fn from_ref(state: &AppState<F>) -> Self {
        state.reader.clone()
    }
}

impl<F: ArticleFeed> AppState<F> {
    /// 创建一个新的 [`AppState`] 实例
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            list: Arc::new(RwLock::new(ListView::new())),
            reader: Arc::new(Mutex::new(DetailView::new())),
        }
    }

    /// 获取上游数据源
    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// 获取列表视图句柄
    pub fn list(&self) -> &ListHandle {
        &self.list
    }

    /// 获取阅读视图句柄
    pub fn reader(&self) -> &ReaderHandle {
        &self.reader
    }

    /// 执行一轮完整的集合加载。
    ///
    /// 返回拉取到的文章数；期间若有更新的加载开始，本轮结果会被丢弃。
    pub async fn reload(&self) -> Result<usize> {
        let token = self.list.write().unwrap().begin_load();

        match self.feed.list_articles().await {
            Ok(articles) => {
                let count = articles.len();
                self.list.write().unwrap().complete_load(token, articles);
                Ok(count)
            }
            Err(e) => {
                self.list.write().unwrap().fail_load(token);
                Err(e)
            }
        }
    }
}
