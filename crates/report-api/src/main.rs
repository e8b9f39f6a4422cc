//! 전략 성과 대시보드 API 서버.
//!
//! Axum 기반 웹 서버를 시작합니다.
//! 대시보드 페이지, 헬스 체크, 유니버스/리포트 엔드포인트를 제공합니다.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use report_api::routes::create_api_router;
use report_api::state::AppState;
use report_core::logging::{init_logging, LogConfig, LogFormat};
use report_core::AppConfig;
use report_data::YahooChartClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일 로드 (없어도 무방)
    dotenvy::dotenv().ok();

    let config = AppConfig::load_default().context("설정 로드 실패")?;

    let log_format = config
        .logging
        .format
        .parse::<LogFormat>()
        .unwrap_or_default();
    init_logging(LogConfig::new(&config.logging.level).with_format(log_format))
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {e}"))?;

    let provider = YahooChartClient::new(
        &config.provider.base_url,
        config.provider.request_timeout_secs,
    )
    .context("데이터 제공자 초기화 실패")?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("서버 주소 파싱 실패")?;

    let state = Arc::new(AppState::new(config, Arc::new(provider)));

    let app = create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(120)));

    info!("대시보드 서버 시작: http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("리스너 바인딩 실패")?;
    axum::serve(listener, app)
        .await
        .context("서버 실행 실패")?;

    Ok(())
}
