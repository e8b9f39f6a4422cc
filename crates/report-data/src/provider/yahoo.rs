//! Yahoo Finance 차트 API 클라이언트.
//!
//! v8 chart API를 사용하여 일별 수정 종가(Adjusted Close) 시계열을
//! 조회합니다.
//!
//! # 심볼 형식
//!
//! 모든 심볼은 Yahoo Finance 형식으로 전달되어야 합니다:
//! - NSE 주식: "RELIANCE.NS", "WIPRO.NS"
//! - 지수: "^NSEI"
//!
//! # 결측 처리
//!
//! 응답에서 null인 종가는 `f64::NAN`으로 매핑됩니다. 걸러내지 않고
//! 그대로 하류 통계로 전파하는 것이 계약입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use report_data::provider::yahoo::YahooChartClient;
//!
//! let client = YahooChartClient::new("https://query1.finance.yahoo.com", 30)?;
//! let series = client
//!     .fetch_daily_adjusted_close("RELIANCE.NS", start, end)
//!     .await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::{debug, info, warn};

use report_core::PriceSeries;

use crate::error::{DataError, Result};
use crate::provider::MarketDataProvider;

/// Yahoo Finance v8 chart API 클라이언트.
#[derive(Clone)]
pub struct YahooChartClient {
    client: reqwest::Client,
    base_url: String,
}

/// chart API 최상위 응답.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

/// `chart` 봉투. 성공이면 `result`, 실패면 `error`가 채워집니다.
#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartApiError>,
}

/// API가 반환하는 에러 본문.
#[derive(Debug, Deserialize)]
struct ChartApiError {
    code: String,
    description: String,
}

/// 단일 심볼의 차트 결과.
#[derive(Debug, Deserialize)]
struct ChartResult {
    /// Unix 타임스탬프 (초). 데이터가 없으면 생략됩니다.
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    adjclose: Option<Vec<AdjCloseBlock>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseBlock {
    /// 수정 종가. 거래 정지일 등은 null로 옵니다.
    adjclose: Vec<Option<f64>>,
}

impl YahooChartClient {
    /// 새로운 차트 API 클라이언트를 생성합니다.
    ///
    /// `base_url`은 테스트에서 목 서버 주소로 바꿀 수 있도록
    /// 주입받습니다.
    pub fn new(base_url: impl Into<String>, request_timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(request_timeout_secs))
            .build()
            .map_err(|e| DataError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// 날짜를 UTC 자정 기준 Unix 타임스탬프로 변환합니다.
    fn to_period(date: NaiveDate) -> i64 {
        date.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    /// 차트 결과를 가격 시계열로 변환합니다.
    ///
    /// 날짜 오름차순 정렬과 중복 날짜 제거(첫 항 유지)로 가격 시계열의
    /// 불변식을 이 경계에서 확립합니다.
    fn to_price_series(ticker: &str, result: ChartResult) -> Result<PriceSeries> {
        let timestamps = result
            .timestamp
            .ok_or_else(|| DataError::NoData {
                ticker: ticker.to_string(),
            })?;

        let adjclose = result
            .indicators
            .adjclose
            .and_then(|mut blocks| {
                if blocks.is_empty() {
                    None
                } else {
                    Some(blocks.remove(0).adjclose)
                }
            })
            .ok_or_else(|| {
                DataError::ParseError(format!("{}: adjclose 필드 없음", ticker))
            })?;

        if timestamps.len() != adjclose.len() {
            return Err(DataError::ParseError(format!(
                "{}: timestamp {}개 / adjclose {}개 불일치",
                ticker,
                timestamps.len(),
                adjclose.len()
            )));
        }

        let mut rows: Vec<(NaiveDate, f64)> = timestamps
            .into_iter()
            .zip(adjclose)
            .filter_map(|(ts, close)| {
                DateTime::from_timestamp(ts, 0)
                    .map(|dt| (dt.date_naive(), close.unwrap_or(f64::NAN)))
            })
            .collect();

        rows.sort_by_key(|(date, _)| *date);
        rows.dedup_by_key(|(date, _)| *date);

        if rows.is_empty() {
            return Err(DataError::NoData {
                ticker: ticker.to_string(),
            });
        }

        let (dates, closes) = rows.into_iter().unzip();
        Ok(PriceSeries::new(ticker, dates, closes))
    }
}

#[async_trait]
impl MarketDataProvider for YahooChartClient {
    async fn fetch_daily_adjusted_close(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let period1 = Self::to_period(start);
        // period2는 배타적이므로 하루를 더해 종료일을 포함시킴
        let period2 = Self::to_period(end.checked_add_days(Days::new(1)).unwrap_or(end));

        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);

        info!(ticker = %ticker, %start, %end, "Yahoo chart API 조회");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
                ("events", "div|split".to_string()),
                ("includeAdjustedClose", "true".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body: ChartResponse = response.json().await.map_err(|e| {
            DataError::ParseError(format!("{}: 응답 파싱 실패 (HTTP {}): {}", ticker, status, e))
        })?;

        if let Some(err) = body.chart.error {
            return Err(DataError::FetchError(format!(
                "{}: API 오류 [{}] {}",
                ticker, err.code, err.description
            )));
        }

        let result = body
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| DataError::NoData {
                ticker: ticker.to_string(),
            })?;

        let series = Self::to_price_series(ticker, result)?;

        if series.len() < 2 {
            warn!(ticker = %ticker, points = series.len(), "가격 데이터가 2개 미만");
        }
        debug!(ticker = %ticker, points = series.len(), "가격 시계열 수신");

        Ok(series)
    }
}
