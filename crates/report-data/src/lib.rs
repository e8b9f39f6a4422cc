//! # Report Data
//!
//! 시장 데이터 수집 크레이트.
//!
//! 외부 제공자로부터 일별 수정 종가 시계열을 가져옵니다.
//! 캐시, 재시도, 부분 결과 복구는 없습니다. 실패는 그대로 상류로
//! 전파되어 리포트 생성을 중단시킵니다.

pub mod error;
pub mod provider;

pub use error::{DataError, Result};
pub use provider::{FixedPriceProvider, MarketDataProvider, YahooChartClient};
