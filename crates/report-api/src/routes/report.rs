//! 성과 리포트 endpoint.
//!
//! 리포트 한 건을 통째로 계산해서 반환합니다:
//! 선택 종목 가격 차트, 자산 곡선 차트(전략 + 벤치마크 + 유니버스 전
//! 종목), 그리고 전략/벤치마크 성과 지표 두 블록입니다.
//!
//! 결과는 어디에도 저장되지 않으며 요청마다 전부 다시 계산됩니다.
//! 필요한 시계열 중 하나라도 가져오지 못하면 리포트 전체가 실패합니다
//! (부분 리포트 없음).

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use report_analytics::{compute_strategy_metrics, ChartSeries, StrategyMetrics};
use report_core::PriceSeries;

use crate::error::{bad_request, from_data_error, internal_error, ApiResult};
use crate::state::AppState;

/// 리포트 요청 쿼리 파라미터.
///
/// 생략된 파라미터는 설정의 기본값으로 채워집니다.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// 분석할 종목 티커 (유니버스 내)
    pub ticker: Option<String>,
    /// 조회 시작일 (ISO 8601)
    pub start_date: Option<String>,
    /// 초기 자본
    pub initial_capital: Option<u64>,
}

/// 성과 지표 블록.
///
/// `StrategyMetrics`의 JSON 직렬화 형태입니다. JSON에는 NaN이 없으므로
/// 비유한 값은 `null`로 내려가고, 프런트엔드가 "NaN"으로 표시합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsBlock {
    /// 블록 제목 (티커)
    pub name: String,
    /// CAGR (%)
    pub cagr_pct: Option<f64>,
    /// 연율화 변동성 (%)
    pub volatility_pct: Option<f64>,
    /// 샤프 비율
    pub sharpe_ratio: Option<f64>,
    /// 최대 낙폭 (%)
    pub max_drawdown_pct: Option<f64>,
}

impl MetricsBlock {
    /// 지표 묶음을 JSON 안전 블록으로 변환합니다.
    fn new(name: impl Into<String>, metrics: StrategyMetrics) -> Self {
        let finite = |v: f64| v.is_finite().then_some(v);
        Self {
            name: name.into(),
            cagr_pct: finite(metrics.cagr_pct),
            volatility_pct: finite(metrics.volatility_pct),
            sharpe_ratio: finite(metrics.sharpe_ratio),
            max_drawdown_pct: finite(metrics.max_drawdown_pct),
        }
    }
}

/// 리포트 응답 구조체.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportResponse {
    /// 분석 대상 티커
    pub ticker: String,
    /// 적용된 조회 시작일
    pub start_date: NaiveDate,
    /// 적용된 조회 종료일 (서버의 오늘 날짜)
    pub end_date: NaiveDate,
    /// 적용된 초기 자본
    pub initial_capital: u64,
    /// 선택 종목 수정 종가 차트
    pub price_chart: ChartSeries,
    /// 자산 곡선 차트 (전략, 벤치마크, 유니버스 전 종목 순서의 12개
    /// 시계열)
    pub equity_chart: Vec<ChartSeries>,
    /// 선택 종목 성과 지표
    pub strategy_metrics: MetricsBlock,
    /// 벤치마크 성과 지표
    pub benchmark_metrics: MetricsBlock,
}

/// 리포트 라우터 생성.
pub fn report_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_report))
}

/// 성과 리포트 핸들러.
#[instrument(skip(state))]
async fn get_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<Json<ReportResponse>> {
    let market = &state.config.market;

    // 유니버스가 비면 기본 티커도 비교 루프도 성립하지 않음 (설정 오류)
    let Some(default_ticker) = market.universe.first() else {
        return Err(internal_error(
            "EMPTY_UNIVERSE",
            "설정된 종목 유니버스가 비어 있습니다",
        ));
    };

    // 1. 입력 검증 (기본값 채움 → 범위 확인)
    let ticker = query.ticker.unwrap_or_else(|| default_ticker.clone());
    if !market.contains(&ticker) {
        return Err(bad_request(
            "INVALID_TICKER",
            format!("유니버스에 없는 티커입니다: {ticker}"),
        ));
    }

    let start_text = query
        .start_date
        .unwrap_or_else(|| market.default_start_date.clone());
    let start = NaiveDate::parse_from_str(&start_text, "%Y-%m-%d").map_err(|_| {
        bad_request(
            "INVALID_DATE",
            format!("시작일 형식이 올바르지 않습니다 (YYYY-MM-DD): {start_text}"),
        )
    })?;

    let end = Utc::now().date_naive();
    if start >= end {
        return Err(bad_request(
            "INVALID_DATE",
            format!("시작일은 오늘보다 앞서야 합니다: {start}"),
        ));
    }

    let initial_capital = query
        .initial_capital
        .unwrap_or(market.default_initial_capital);
    if initial_capital == 0 || initial_capital > market.max_initial_capital {
        return Err(bad_request(
            "INVALID_CAPITAL",
            format!(
                "초기 자본은 1 이상 {} 이하여야 합니다: {initial_capital}",
                market.max_initial_capital
            ),
        ));
    }

    info!(%ticker, %start, %end, initial_capital, "리포트 생성 시작");

    // 2. 시계열 수집 (순차 요청, 하나라도 실패하면 전체 중단)
    let selected = fetch(&state, &ticker, start, end).await?;
    let benchmark = fetch(&state, &market.benchmark, start, end).await?;

    let mut universe_series: Vec<PriceSeries> = Vec::with_capacity(market.universe.len());
    for symbol in &market.universe {
        if symbol == &ticker {
            universe_series.push(selected.clone());
        } else {
            universe_series.push(fetch(&state, symbol, start, end).await?);
        }
    }

    // 3. 파생 계산
    let capital = initial_capital as f64;

    let strategy_returns = selected.daily_returns();
    let benchmark_returns = benchmark.daily_returns();

    // 전략과 벤치마크가 앞에 오고, 유니버스 전 종목 곡선이 뒤따름
    let mut equity_chart = vec![
        ChartSeries::from_equity_curve("Sample Strategy", &strategy_returns.equity_curve(capital)),
        ChartSeries::from_equity_curve(
            "Benchmark (Nifty)",
            &benchmark_returns.equity_curve(capital),
        ),
    ];
    for series in &universe_series {
        equity_chart.push(ChartSeries::from_equity_curve(
            &series.ticker,
            &series.daily_returns().equity_curve(capital),
        ));
    }

    let strategy_metrics =
        MetricsBlock::new(&ticker, compute_strategy_metrics(&strategy_returns));
    let benchmark_metrics = MetricsBlock::new(
        &market.benchmark,
        compute_strategy_metrics(&benchmark_returns),
    );

    Ok(Json(ReportResponse {
        price_chart: ChartSeries::from_price_series(&selected),
        ticker,
        start_date: start,
        end_date: end,
        initial_capital,
        equity_chart,
        strategy_metrics,
        benchmark_metrics,
    }))
}

/// Provider에서 시계열 하나를 가져오고 데이터 에러를 HTTP 에러로
/// 변환합니다.
async fn fetch(
    state: &AppState,
    ticker: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> ApiResult<PriceSeries> {
    state
        .provider
        .fetch_daily_adjusted_close(ticker, start, end)
        .await
        .map_err(from_data_error)
}
