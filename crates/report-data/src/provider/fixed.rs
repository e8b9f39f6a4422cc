//! 고정 데이터 Provider.
//!
//! 메모리에 올려둔 시계열을 그대로 돌려주는 Provider입니다.
//! 네트워크 없이 라우트 테스트나 오프라인 데모를 돌릴 때 실제
//! Provider 자리에 끼워 넣습니다.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use report_core::PriceSeries;

use crate::error::{DataError, Result};
use crate::provider::MarketDataProvider;

/// 메모리 내 가격 시계열 Provider.
#[derive(Debug, Clone, Default)]
pub struct FixedPriceProvider {
    series: HashMap<String, PriceSeries>,
}

impl FixedPriceProvider {
    /// 빈 Provider를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 시계열을 등록합니다. 같은 티커는 덮어씁니다.
    pub fn insert(&mut self, series: PriceSeries) {
        self.series.insert(series.ticker.clone(), series);
    }

    /// 시계열을 등록하고 자신을 반환합니다 (빌더 스타일).
    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.insert(series);
        self
    }
}

#[async_trait]
impl MarketDataProvider for FixedPriceProvider {
    async fn fetch_daily_adjusted_close(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let source = self.series.get(ticker).ok_or_else(|| DataError::NoData {
            ticker: ticker.to_string(),
        })?;

        let mut dates = Vec::new();
        let mut closes = Vec::new();
        for (date, close) in source.dates.iter().zip(&source.closes) {
            if *date >= start && *date <= end {
                dates.push(*date);
                closes.push(*close);
            }
        }

        if dates.is_empty() {
            return Err(DataError::NoData {
                ticker: ticker.to_string(),
            });
        }

        Ok(PriceSeries::new(ticker, dates, closes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_filters_by_range() {
        let provider = FixedPriceProvider::new().with_series(PriceSeries::new(
            "TEST.NS",
            vec![date(2023, 1, 2), date(2023, 1, 3), date(2023, 1, 4)],
            vec![100.0, 101.0, 102.0],
        ));

        let series = provider
            .fetch_daily_adjusted_close("TEST.NS", date(2023, 1, 3), date(2023, 1, 4))
            .await
            .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.dates[0], date(2023, 1, 3));
    }

    #[tokio::test]
    async fn test_unknown_ticker_is_no_data() {
        let provider = FixedPriceProvider::new();
        let err = provider
            .fetch_daily_adjusted_close("NOPE.NS", date(2023, 1, 2), date(2023, 1, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, DataError::NoData { .. }));
    }
}
