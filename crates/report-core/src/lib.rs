//! # Report Core
//!
//! 전략 성과 리포트의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 리포트 파이프라인 전반에서 사용되는 기본 타입을 제공합니다:
//! - 가격/수익률/자산 곡선 시계열 구조체
//! - 종목 유니버스 및 입력 범위 설정
//! - 에러 타입
//! - 로깅 인프라

pub mod config;
pub mod error;
pub mod logging;
pub mod series;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use series::*;
