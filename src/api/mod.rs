mod query;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{feed::ArticleFeed, state::AppState};

/// 组装完整路由，视图接口统一挂在 `/api` 下。
pub fn setup_route<F>(state: AppState<F>) -> Router
where
    F: ArticleFeed + Clone + 'static,
{
    let router = Router::new()
        .nest("/api", query::setup_route::<F>())
        .with_state(state);

    add_middlewares(router)
}

pub async fn run_server<F>(state: AppState<F>)
where
    F: ArticleFeed + Clone + 'static,
{
    let router = setup_route(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    println!("Listening on :3000");
    axum::serve(listener, router).await.unwrap();
}

fn add_middlewares(router: Router) -> Router {
    fn log_failure(
        err: tower_http::classify::ServerErrorsFailureClass,
        _latency: std::time::Duration,
        _span: &tracing::Span,
    ) {
        tracing::error!(error = %err, "request failed");
    }

    router.layer(
        TraceLayer::new_for_http()
            .on_failure(log_failure)
            .on_request(|_req: &_, _span: &tracing::Span| {
                // 空实现或省略此行即可关闭请求日志
            }),
    )
}
