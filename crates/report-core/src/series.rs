//! 가격/수익률/자산 곡선 시계열 도메인 타입.
//!
//! 리포트 한 번 생성할 때마다 일시적으로 소유되는 데이터이며
//! 어디에도 저장되지 않습니다.
//!
//! # 파생 관계
//!
//! `PriceSeries` → (일별 변화율) → `ReturnSeries` → (복리 누적) → `EquityCurve`
//!
//! 모든 값은 `f64`입니다. 비유한(NaN/Inf) 값은 걸러내지 않고 그대로
//! 하류로 전파합니다. 0원 가격으로 나누거나 결측 가격이 섞여 들어와도
//! 에러가 아니라 비유한 수치 결과가 됩니다.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// 일별 수정 종가(Adjusted Close) 시계열.
///
/// 날짜 오름차순, 날짜 중복 없음이 불변식입니다.
/// 이 불변식은 데이터 제공자 경계에서 확립되며(정렬 + 중복 제거),
/// 코어는 재검증하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    /// 종목 티커 (예: "RELIANCE.NS")
    pub ticker: String,
    /// 거래일 (오름차순)
    pub dates: Vec<NaiveDate>,
    /// 수정 종가 (dates와 같은 길이)
    pub closes: Vec<f64>,
}

impl PriceSeries {
    /// 새로운 가격 시계열을 생성합니다.
    pub fn new(ticker: impl Into<String>, dates: Vec<NaiveDate>, closes: Vec<f64>) -> Self {
        debug_assert_eq!(dates.len(), closes.len());
        Self {
            ticker: ticker.into(),
            dates,
            closes,
        }
    }

    /// 데이터 포인트 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// 시계열이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// 일별 수익률 시계열을 파생합니다.
    ///
    /// 전일 대비 변화율 `p[i] / p[i-1] - 1`을 계산합니다.
    /// 첫 항은 정의되지 않으므로 제거되어, 결과는 원본보다 하나 짧습니다.
    ///
    /// 0원 가격이 끼어 있으면 해당 수익률은 비유한 값이 되며 그대로
    /// 전파됩니다.
    pub fn daily_returns(&self) -> ReturnSeries {
        if self.len() < 2 {
            return ReturnSeries::new(Vec::new(), Vec::new());
        }

        let dates = self.dates[1..].to_vec();
        let values = self
            .closes
            .windows(2)
            .map(|w| w[1] / w[0] - 1.0)
            .collect();

        ReturnSeries::new(dates, values)
    }
}

/// 일별 수익률 시계열.
///
/// 원본 가격 시계열보다 한 항 짧습니다 (첫 항 제거).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnSeries {
    /// 수익률이 속한 거래일 (오름차순)
    pub dates: Vec<NaiveDate>,
    /// 일별 수익률 (소수, 0.01 = 1%)
    pub values: Vec<f64>,
}

impl ReturnSeries {
    /// 새로운 수익률 시계열을 생성합니다.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { dates, values }
    }

    /// 데이터 포인트 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 시계열이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 날짜 인덱스에 존재하는 서로 다른 달력 연도 수를 반환합니다.
    ///
    /// 경과 연수를 연도 레이블 개수로 근사하는 의도적 단순화입니다.
    /// 단일 연도 시계열이면 1을 반환하므로 CAGR 지수가 1이 되어
    /// 연율화 조정이 없습니다.
    pub fn distinct_years(&self) -> usize {
        let mut years: Vec<i32> = self.dates.iter().map(|d| d.year()).collect();
        years.sort_unstable();
        years.dedup();
        years.len()
    }

    /// 누적 수익 곡선을 반환합니다.
    ///
    /// `i`번째 값은 `∏(1 + r_j), j ≤ i` 입니다.
    pub fn cumulative_returns(&self) -> Vec<f64> {
        let mut acc = 1.0_f64;
        self.values
            .iter()
            .map(|r| {
                acc *= 1.0 + r;
                acc
            })
            .collect()
    }

    /// 초기 자본을 복리로 굴린 자산 곡선을 파생합니다.
    ///
    /// `i`번째 값은 `initial_capital × ∏(1 + r_j), j ≤ i` 입니다.
    /// 초기 자본은 양수를 가정합니다.
    pub fn equity_curve(&self, initial_capital: f64) -> EquityCurve {
        let values = self
            .cumulative_returns()
            .into_iter()
            .map(|c| initial_capital * c)
            .collect();

        EquityCurve {
            dates: self.dates.clone(),
            values,
        }
    }
}

/// 자산 곡선 (Equity Curve).
///
/// 초기 투자금이 복리 수익률 아래에서 시간에 따라 갖는 가치입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityCurve {
    /// 거래일 (오름차순)
    pub dates: Vec<NaiveDate>,
    /// 자산 가치
    pub values: Vec<f64>,
}

impl EquityCurve {
    /// 데이터 포인트 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 곡선이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_prices() -> PriceSeries {
        PriceSeries::new(
            "TEST.NS",
            vec![
                date(2023, 1, 2),
                date(2023, 1, 3),
                date(2023, 1, 4),
                date(2023, 1, 5),
            ],
            vec![100.0, 110.0, 99.0, 108.9],
        )
    }

    #[test]
    fn test_daily_returns_drops_first_entry() {
        let returns = sample_prices().daily_returns();

        assert_eq!(returns.len(), 3);
        assert_eq!(returns.dates[0], date(2023, 1, 3));
        assert!((returns.values[0] - 0.10).abs() < 1e-12);
        assert!((returns.values[1] - (-0.10)).abs() < 1e-12);
        assert!((returns.values[2] - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_daily_returns_too_short() {
        let prices = PriceSeries::new("TEST.NS", vec![date(2023, 1, 2)], vec![100.0]);
        assert!(prices.daily_returns().is_empty());
    }

    #[test]
    fn test_zero_price_propagates_non_finite() {
        let prices = PriceSeries::new(
            "TEST.NS",
            vec![date(2023, 1, 2), date(2023, 1, 3), date(2023, 1, 4)],
            vec![100.0, 0.0, 50.0],
        );
        let returns = prices.daily_returns();

        // 0원 가격으로 나누면 비유한 값이 되지만 에러는 아님
        assert!((returns.values[0] - (-1.0)).abs() < 1e-12);
        assert!(!returns.values[1].is_finite());
    }

    #[test]
    fn test_cumulative_returns_worked_example() {
        // [0.10, -0.10, 0.10] → [1.10, 0.99, 1.089]
        let returns = ReturnSeries::new(
            vec![date(2023, 1, 3), date(2023, 1, 4), date(2023, 1, 5)],
            vec![0.10, -0.10, 0.10],
        );
        let cum = returns.cumulative_returns();

        assert!((cum[0] - 1.10).abs() < 1e-12);
        assert!((cum[1] - 0.99).abs() < 1e-12);
        assert!((cum[2] - 1.089).abs() < 1e-12);
    }

    #[test]
    fn test_equity_curve_compounding() {
        let returns = ReturnSeries::new(
            vec![date(2023, 1, 3), date(2023, 1, 4)],
            vec![0.10, -0.10],
        );
        let curve = returns.equity_curve(1_000_000.0);

        assert_eq!(curve.len(), 2);
        assert!((curve.values[0] - 1_100_000.0).abs() < 1e-6);
        assert!((curve.values[1] - 990_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_distinct_years() {
        let returns = ReturnSeries::new(
            vec![
                date(2021, 12, 30),
                date(2021, 12, 31),
                date(2022, 1, 3),
                date(2023, 1, 2),
            ],
            vec![0.0; 4],
        );
        assert_eq!(returns.distinct_years(), 3);

        let single = ReturnSeries::new(vec![date(2023, 5, 2)], vec![0.01]);
        assert_eq!(single.distinct_years(), 1);
    }
}
