//! # Report Analytics
//!
//! 성과 지표 계산과 차트 페이로드 생성을 담당합니다.
//!
//! - `performance`: 수익률 시계열 → 네 가지 스칼라 통계 (순수 함수)
//! - `portfolio`: 가격/자산 곡선 → 웹 대시보드용 차트 데이터

pub mod performance;
pub mod portfolio;

pub use performance::{compute_strategy_metrics, StrategyMetrics, TRADING_DAYS_PER_YEAR};
pub use portfolio::{ChartPoint, ChartSeries};
