//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/` - 대시보드 HTML
//! - `/health` - 헬스 체크 (liveness)
//! - `/api/universe` - 종목 유니버스와 입력 기본값
//! - `/api/report` - 성과 리포트 (차트 + 지표)

pub mod dashboard;
pub mod health;
pub mod report;
pub mod universe;

pub use dashboard::dashboard_router;
pub use health::{health_router, HealthResponse};
pub use report::{report_router, MetricsBlock, ReportResponse};
pub use universe::{universe_router, UniverseResponse};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(dashboard_router())
        .nest("/health", health_router())
        .nest("/api/universe", universe_router())
        .nest("/api/report", report_router())
}
