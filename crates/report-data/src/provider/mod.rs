//! 데이터 Provider 모듈.
//!
//! 다양한 소스에서 가격 시계열을 가져오는 Provider들을 정의합니다.
//!
//! ## Yahoo Finance 차트 API
//! - `YahooChartClient`: v8 chart API 클라이언트
//! - NSE 주식("RELIANCE.NS")과 지수("^NSEI")의 일별 수정 종가
//!
//! ## 고정 데이터 Provider
//! - `FixedPriceProvider`: 메모리 내 시계열 (테스트/오프라인 데모용)

pub mod fixed;
pub mod yahoo;

use async_trait::async_trait;
use chrono::NaiveDate;
use report_core::PriceSeries;

use crate::error::Result;

pub use fixed::FixedPriceProvider;
pub use yahoo::YahooChartClient;

/// 일별 수정 종가 시계열 제공자.
///
/// 코어는 이 트레잇을 블랙박스로 취급합니다. 네트워크 오류, 알 수 없는
/// 티커, 빈 결과 등의 실패는 호출자가 분류하지 않고 그대로 전파합니다.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// 주어진 기간의 일별 수정 종가 시계열을 가져옵니다.
    ///
    /// 반환되는 시계열은 날짜 오름차순이며 날짜 중복이 없습니다.
    async fn fetch_daily_adjusted_close(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries>;
}
