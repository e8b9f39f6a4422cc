//! # Report API
//!
//! 전략 성과 대시보드의 Axum 기반 웹 서버입니다.
//!
//! - `/` - 대시보드 HTML
//! - `/health` - 헬스 체크
//! - `/api/universe` - 종목 유니버스와 입력 기본값
//! - `/api/report` - 성과 리포트 (차트 + 지표)

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiErrorResponse, ApiResult};
pub use routes::create_api_router;
pub use state::AppState;
