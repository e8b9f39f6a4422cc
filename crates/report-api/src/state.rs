//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 설정과 데이터 제공자를 담아 Arc로 래핑되어
//! Axum의 State extractor를 통해 핸들러에 주입됩니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use report_core::AppConfig;
use report_data::MarketDataProvider;

/// 애플리케이션 공유 상태.
///
/// 리포트는 요청마다 새로 계산되므로 여기에는 캐시나 저장소가 없습니다.
/// 설정, Provider, 서버 메타데이터만 공유합니다.
#[derive(Clone)]
pub struct AppState {
    /// 애플리케이션 설정
    pub config: AppConfig,

    /// 시장 데이터 제공자 (trait object — 테스트에서 고정 Provider로 교체)
    pub provider: Arc<dyn MarketDataProvider>,

    /// 서버 시작 시각 (업타임 계산용)
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// 새로운 상태를 생성합니다.
    pub fn new(config: AppConfig, provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            config,
            provider,
            started_at: Utc::now(),
        }
    }

    /// 서버 업타임(초)을 반환합니다.
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

#[cfg(test)]
pub mod test_support {
    //! 라우트 테스트용 상태 구성 헬퍼.

    use super::*;
    use chrono::NaiveDate;
    use report_core::{PriceSeries, BENCHMARK_TICKER, NSE_UNIVERSE};
    use report_data::FixedPriceProvider;

    /// 유니버스 전 종목 + 벤치마크에 대한 결정적 시계열을 가진 상태를
    /// 만듭니다.
    ///
    /// 각 시계열은 2023년 초 5 거래일, 일별 +1% 상승입니다.
    pub fn fixture_state() -> Arc<AppState> {
        let mut provider = FixedPriceProvider::new();

        let dates: Vec<NaiveDate> = (2..=6)
            .map(|d| NaiveDate::from_ymd_opt(2023, 1, d).unwrap())
            .collect();
        let closes: Vec<f64> = (0..dates.len())
            .map(|i| 100.0 * 1.01_f64.powi(i as i32))
            .collect();

        for ticker in NSE_UNIVERSE.iter().chain(std::iter::once(&BENCHMARK_TICKER)) {
            provider.insert(PriceSeries::new(*ticker, dates.clone(), closes.clone()));
        }

        Arc::new(AppState::new(AppConfig::default(), Arc::new(provider)))
    }

    /// 아무 시계열도 없는 상태를 만듭니다 (업스트림 결측 시나리오).
    pub fn empty_state() -> Arc<AppState> {
        Arc::new(AppState::new(
            AppConfig::default(),
            Arc::new(FixedPriceProvider::new()),
        ))
    }
}
