//! 종목 유니버스 endpoint.
//!
//! 대시보드 컨트롤을 채우는 데 필요한 유니버스 목록과 입력 기본값을
//! 제공합니다.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

/// 유니버스 응답 구조체.
#[derive(Debug, Serialize, Deserialize)]
pub struct UniverseResponse {
    /// 선택 가능한 종목 티커 목록
    pub universe: Vec<String>,
    /// 벤치마크 지수 티커
    pub benchmark: String,
    /// 기본 조회 시작일 (ISO 8601)
    pub default_start_date: String,
    /// 초기 자본 기본값
    pub default_initial_capital: u64,
    /// 초기 자본 상한
    pub max_initial_capital: u64,
}

/// 유니버스 라우터 생성.
pub fn universe_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_universe))
}

/// 유니버스/기본값 조회 핸들러.
async fn get_universe(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let market = &state.config.market;

    Json(UniverseResponse {
        universe: market.universe.clone(),
        benchmark: market.benchmark.clone(),
        default_start_date: market.default_start_date.clone(),
        default_initial_capital: market.default_initial_capital,
        max_initial_capital: market.max_initial_capital,
    })
}
