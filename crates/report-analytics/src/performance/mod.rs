//! 성과 지표 모듈.

pub mod metrics;

pub use metrics::{compute_strategy_metrics, StrategyMetrics, TRADING_DAYS_PER_YEAR};
