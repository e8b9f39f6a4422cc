//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! TOML 파일(선택적) 위에 `REPORT__` 접두사 환경 변수를 덮어씁니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ReportResult;

/// 비교 대상 종목 유니버스 (NSE 10종목).
///
/// 종목 선택 컨트롤과 자산 곡선 비교 루프가 모두 이 상수 하나를
/// 공유합니다. 리터럴을 두 곳에 반복하면 두 목록이 어긋날 수 있으므로
/// 여기서만 정의합니다.
pub const NSE_UNIVERSE: [&str; 10] = [
    "RELIANCE.NS",
    "HCLTECH.NS",
    "TATAMOTORS.NS",
    "M&M.NS",
    "EICHERMOT.NS",
    "JSWSTEEL.NS",
    "BAJFINANCE.NS",
    "APOLLOHOSP.NS",
    "WIPRO.NS",
    "ADANIENT.NS",
];

/// 벤치마크 지수 티커 (Nifty 50).
pub const BENCHMARK_TICKER: &str = "^NSEI";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 시장/입력 범위 설정
    #[serde(default)]
    pub market: MarketConfig,
    /// 데이터 제공자 설정
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            market: MarketConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 시장/입력 범위 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarketConfig {
    /// 종목 유니버스 (선택 컨트롤과 비교 루프가 공유)
    pub universe: Vec<String>,
    /// 벤치마크 지수 티커
    pub benchmark: String,
    /// 기본 조회 시작일 (ISO 8601)
    pub default_start_date: String,
    /// 초기 자본 기본값
    pub default_initial_capital: u64,
    /// 초기 자본 상한
    pub max_initial_capital: u64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            universe: NSE_UNIVERSE.iter().map(|s| s.to_string()).collect(),
            benchmark: BENCHMARK_TICKER.to_string(),
            default_start_date: "2019-01-01".to_string(),
            default_initial_capital: 1_000_000,
            max_initial_capital: 1_000_000_000,
        }
    }
}

impl MarketConfig {
    /// 티커가 유니버스에 속하는지 확인합니다.
    pub fn contains(&self, ticker: &str) -> bool {
        self.universe.iter().any(|t| t == ticker)
    }
}

/// 데이터 제공자 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// 차트 API 기본 URL
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값에서 시작하고, 환경 변수만 적용됩니다.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("REPORT")
                    .separator("__")
                    .try_parsing(true),
            );

        let loaded = builder.build()?;

        // 파일/환경에 없는 섹션은 Default로 채움
        let mut cfg = AppConfig::default();
        if let Ok(server) = loaded.get::<ServerConfig>("server") {
            cfg.server = server;
        }
        if let Ok(logging) = loaded.get::<LoggingConfig>("logging") {
            cfg.logging = logging;
        }
        if let Ok(market) = loaded.get::<MarketConfig>("market") {
            cfg.market = market;
        }
        if let Ok(provider) = loaded.get::<ProviderConfig>("provider") {
            cfg.provider = provider;
        }

        Ok(cfg)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> ReportResult<Self> {
        Self::load("config/default.toml")
    }
}
