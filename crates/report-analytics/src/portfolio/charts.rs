//! 웹 대시보드용 차트 페이로드.
//!
//! 시계열 도메인 타입을 브라우저 차트 라이브러리가 바로 소비할 수 있는
//! (x, y) 포인트 목록으로 변환합니다.
//!
//! # 비유한 값 처리
//!
//! JSON에는 NaN/Inf가 없으므로 비유한 y 값은 `null`로 직렬화합니다.
//! 차트 라이브러리는 `null`을 선의 끊김으로 그립니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use report_core::{EquityCurve, PriceSeries};

/// 차트 데이터 포인트 하나.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// UTC 자정 기준 epoch 밀리초
    pub x: i64,
    /// y 값. 비유한 값은 `None` → JSON `null`
    pub y: Option<f64>,
}

/// 이름 붙은 차트 시계열 하나 (선 하나).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    /// 범례에 표시할 이름 (보통 티커)
    pub name: String,
    /// 시간순 데이터 포인트
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// 가격 시계열에서 차트 시계열을 만듭니다.
    pub fn from_price_series(series: &PriceSeries) -> Self {
        Self {
            name: series.ticker.clone(),
            points: build_points(&series.dates, &series.closes),
        }
    }

    /// 자산 곡선에서 차트 시계열을 만듭니다.
    pub fn from_equity_curve(name: impl Into<String>, curve: &EquityCurve) -> Self {
        Self {
            name: name.into(),
            points: build_points(&curve.dates, &curve.values),
        }
    }
}

/// 날짜/값 쌍을 차트 포인트 목록으로 변환합니다.
fn build_points(dates: &[NaiveDate], values: &[f64]) -> Vec<ChartPoint> {
    dates
        .iter()
        .zip(values)
        .map(|(date, value)| ChartPoint {
            x: epoch_millis(*date),
            y: value.is_finite().then_some(*value),
        })
        .collect()
}

/// 날짜를 UTC 자정 기준 epoch 밀리초로 변환합니다.
fn epoch_millis(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .timestamp_millis()
}
