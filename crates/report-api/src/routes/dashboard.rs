//! 대시보드 HTML endpoint.
//!
//! 단일 페이지 대시보드를 제공합니다. 페이지는 빌드 시점에 바이너리에
//! 포함되며, 브라우저에서 `/api/universe`와 `/api/report`를 호출해
//! 차트와 지표를 그립니다.

use axum::response::Html;
use axum::{routing::get, Router};
use std::sync::Arc;

use crate::state::AppState;

/// 대시보드 페이지 본문.
const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

/// 대시보드 라우터 생성.
pub fn dashboard_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(serve_dashboard))
}

/// 대시보드 페이지 핸들러.
async fn serve_dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
