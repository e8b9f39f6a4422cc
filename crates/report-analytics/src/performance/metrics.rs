//! 성과 지표 계산 모듈
//!
//! 수익률 시계열 하나에서 네 가지 스칼라 통계를 계산합니다:
//! - CAGR: 연평균 복리 성장률 (%)
//! - 변동성 (Volatility): 일별 수익률 표준편차의 연율화 (%)
//! - 샤프 비율 (Sharpe Ratio): CAGR / 변동성
//! - 최대 낙폭 (Maximum Drawdown): 고점 대비 최대 하락폭 (%, 0 이하)
//!
//! 상태도 I/O도 없는 순수 함수입니다.
//!
//! # NaN 정책
//!
//! 어느 통계도 비유한 값을 걸러내지 않습니다. 입력 수익률에 NaN/Inf가
//! 섞여 있으면(예: 0원 또는 결측 가격에서 파생) 해당 통계는 에러 대신
//! 비유한 결과를 조용히 전파합니다.

use serde::{Deserialize, Serialize};

use report_core::ReturnSeries;

/// 연간 거래일 수 (연율화 계산에 사용).
///
/// 주식 시장은 일반적으로 연간 약 252일 거래됩니다.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// 전략 성과 지표 묶음.
///
/// 요청마다 새로 계산되며 어디에도 저장되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    /// CAGR (%)
    ///
    /// 누적 수익 곡선의 처음과 끝 비율을 달력 연도 개수로 연율화한
    /// 값입니다.
    pub cagr_pct: f64,

    /// 연율화 변동성 (%)
    ///
    /// 일별 수익률의 모집단 표준편차 × √252 입니다.
    pub volatility_pct: f64,

    /// 샤프 비율 (Sharpe Ratio)
    ///
    /// CAGR / 변동성. 무위험 이자율은 빼지 않습니다 — 원 공식 그대로
    /// 유지합니다 (교과서식 샤프 비율로 "고치지" 않음).
    /// 변동성이 정확히 0이면 NaN입니다.
    pub sharpe_ratio: f64,

    /// 최대 낙폭 (%)
    ///
    /// 항상 0 이하입니다. 데이터가 2개 미만이면 고점-저점을 정의할 수
    /// 없으므로 NaN입니다.
    pub max_drawdown_pct: f64,
}

/// 수익률 시계열에서 성과 지표를 계산합니다.
///
/// # 계산 공식
///
/// - 누적 곡선: `cum_i = ∏(1 + r_j), j ≤ i`
/// - CAGR = `(cum_last / cum_first)^(1 / 달력연도수) − 1` × 100
///   - "달력연도수"는 날짜 인덱스의 서로 다른 연도 레이블 개수입니다.
///     경과 시간이 아닌 연도 레이블을 세는 의도적 단순화로, 단일 연도
///     시계열이면 지수가 1이라 연율화 조정이 없습니다.
/// - 변동성 = 모집단 표준편차 × √252 × 100
/// - 샤프 비율 = CAGR / 변동성 (변동성 0이면 NaN)
/// - 최대 낙폭 = `min(cum_i / 누적최고점_i − 1)` × 100
///
/// # 예시
///
/// ```rust,ignore
/// let metrics = compute_strategy_metrics(&returns);
/// println!("CAGR (%): {:.2}", metrics.cagr_pct);
/// ```
pub fn compute_strategy_metrics(returns: &ReturnSeries) -> StrategyMetrics {
    if returns.is_empty() {
        return StrategyMetrics {
            cagr_pct: f64::NAN,
            volatility_pct: f64::NAN,
            sharpe_ratio: f64::NAN,
            max_drawdown_pct: f64::NAN,
        };
    }

    let cumulative = returns.cumulative_returns();

    let cagr_pct = calculate_cagr(&cumulative, returns.distinct_years());
    let volatility_pct = annualized_volatility(&returns.values);
    let sharpe_ratio = if volatility_pct == 0.0 {
        f64::NAN
    } else {
        cagr_pct / volatility_pct
    };
    let max_drawdown_pct = calculate_max_drawdown(&cumulative);

    StrategyMetrics {
        cagr_pct,
        volatility_pct,
        sharpe_ratio,
        max_drawdown_pct,
    }
}

/// 누적 수익 곡선에서 CAGR을 계산합니다 (%).
fn calculate_cagr(cumulative: &[f64], distinct_years: usize) -> f64 {
    let first = cumulative[0];
    let last = cumulative[cumulative.len() - 1];
    let years = distinct_years.max(1) as f64;

    ((last / first).powf(1.0 / years) - 1.0) * 100.0
}

/// 연율화 변동성을 계산합니다 (%).
///
/// 모집단 표준편차(n으로 나눔)를 사용합니다. 표본 표준편차(n−1)가
/// 아닙니다.
fn annualized_volatility(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

    variance.sqrt() * (TRADING_DAYS_PER_YEAR as f64).sqrt() * 100.0
}

/// 누적 수익 곡선에서 최대 낙폭을 계산합니다 (%).
///
/// 각 지점에서 `값 / 누적최고점 − 1`을 계산하면 결과는 모든 곳에서
/// 0 이하이며 누적 고점에서 0입니다. 그 최소값이 최대 낙폭입니다.
///
/// 데이터가 2개 미만이면 고점에서 저점으로의 이동이 성립하지 않으므로
/// NaN을 반환합니다.
fn calculate_max_drawdown(cumulative: &[f64]) -> f64 {
    if cumulative.len() < 2 {
        return f64::NAN;
    }

    let mut peak = cumulative[0];
    let mut min_dd = f64::NAN;

    for &value in cumulative {
        if value > peak {
            peak = value;
        }
        let dd = value / peak - 1.0;
        // f64::min은 NaN이 아닌 쪽을 고르므로 비유한 지점은 건너뜀
        min_dd = min_dd.min(dd);
    }

    min_dd * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// 같은 연도 안에서 연속 거래일 날짜를 생성.
    fn same_year_series(values: Vec<f64>) -> ReturnSeries {
        let dates = (0..values.len())
            .map(|i| date(2023, 1, 2) + chrono::Days::new(i as u64))
            .collect();
        ReturnSeries::new(dates, values)
    }

    #[test]
    fn test_all_zero_returns() {
        let metrics = compute_strategy_metrics(&same_year_series(vec![0.0; 10]));

        assert_eq!(metrics.cagr_pct, 0.0);
        assert_eq!(metrics.volatility_pct, 0.0);
        assert!(metrics.sharpe_ratio.is_nan()); // 0으로 나누기 가드
        assert_eq!(metrics.max_drawdown_pct, 0.0);
    }

    #[test]
    fn test_monotonic_increase_has_zero_drawdown() {
        // 단조 증가 가격 → 모든 수익률 양수 → 낙폭 없음
        let metrics = compute_strategy_metrics(&same_year_series(vec![0.01; 20]));

        assert_eq!(metrics.max_drawdown_pct, 0.0);
        assert!(metrics.cagr_pct > 0.0);
    }

    #[test]
    fn test_single_shock_drawdown() {
        // -50% 충격 한 번, 이후 무변동 → 최대 낙폭 -50%
        let mut values = vec![0.0; 10];
        values[4] = -0.50;
        let metrics = compute_strategy_metrics(&same_year_series(values));

        assert!((metrics.max_drawdown_pct - (-50.0)).abs() < 1e-9);
    }

    #[test]
    fn test_volatility_sign_invariance() {
        let values = vec![0.01, -0.02, 0.015, -0.005, 0.03];
        let negated: Vec<f64> = values.iter().map(|v| -v).collect();

        let a = compute_strategy_metrics(&same_year_series(values));
        let b = compute_strategy_metrics(&same_year_series(negated));

        assert!((a.volatility_pct - b.volatility_pct).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_drawdown_is_nan() {
        let metrics = compute_strategy_metrics(&same_year_series(vec![0.01]));
        assert!(metrics.max_drawdown_pct.is_nan());
    }

    #[test]
    fn test_worked_example_single_year() {
        // 누적 곡선 [1.10, 0.99, 1.089]
        let metrics = compute_strategy_metrics(&same_year_series(vec![0.10, -0.10, 0.10]));

        // CAGR = (1.089 / 1.10)^(1/1) − 1 = −1.0%
        assert!((metrics.cagr_pct - (-1.0)).abs() < 1e-9);
        // 최대 낙폭 = (0.99 / 1.10) − 1 = −10%
        assert!((metrics.max_drawdown_pct - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_multi_year_cagr_uses_year_labels() {
        // 2개 연도에 걸친 시계열: 지수는 1/2
        let returns = ReturnSeries::new(
            vec![date(2022, 12, 30), date(2023, 1, 2)],
            vec![0.10, 0.10],
        );
        let metrics = compute_strategy_metrics(&returns);

        // 누적 1.21 → (1.21/1.10)^(1/2) − 1
        let expected = ((1.21_f64 / 1.10).powf(0.5) - 1.0) * 100.0;
        assert!((metrics.cagr_pct - expected).abs() < 1e-9);
    }

    #[test]
    fn test_nan_input_propagates() {
        let metrics =
            compute_strategy_metrics(&same_year_series(vec![0.01, f64::NAN, 0.02]));

        assert!(metrics.cagr_pct.is_nan());
        assert!(metrics.volatility_pct.is_nan());
        assert!(metrics.sharpe_ratio.is_nan());
    }

    #[test]
    fn test_empty_series_is_all_nan() {
        let metrics = compute_strategy_metrics(&ReturnSeries::new(Vec::new(), Vec::new()));

        assert!(metrics.cagr_pct.is_nan());
        assert!(metrics.volatility_pct.is_nan());
        assert!(metrics.sharpe_ratio.is_nan());
        assert!(metrics.max_drawdown_pct.is_nan());
    }

    proptest! {
        /// 변동성은 수익률 부호에 불변, 크기에는 민감.
        #[test]
        fn prop_volatility_sign_invariant(values in prop::collection::vec(-0.2f64..0.2, 2..60)) {
            let negated: Vec<f64> = values.iter().map(|v| -v).collect();

            let a = compute_strategy_metrics(&same_year_series(values));
            let b = compute_strategy_metrics(&same_year_series(negated));

            prop_assert!((a.volatility_pct - b.volatility_pct).abs() < 1e-9);
        }

        /// 최대 낙폭은 항상 0 이하 (2개 이상 포인트, 유한 입력).
        #[test]
        fn prop_drawdown_non_positive(values in prop::collection::vec(-0.2f64..0.2, 2..60)) {
            let metrics = compute_strategy_metrics(&same_year_series(values));
            prop_assert!(metrics.max_drawdown_pct <= 0.0);
        }
    }
}
