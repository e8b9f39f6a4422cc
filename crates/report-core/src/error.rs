//! 리포트 시스템의 에러 타입.
//!
//! 이 모듈은 리포트 파이프라인 전반에서 사용되는 에러 타입을 정의합니다.
//! 재시도 정책은 없습니다. 열한 개 시계열 중 하나라도 실패하면 리포트
//! 생성 전체가 중단됩니다.

use thiserror::Error;

/// 핵심 리포트 에러.
///
/// 데이터/HTTP 계층은 각자의 에러 타입을 가지므로 여기에는 코어가
/// 실제로 만들어내는 범주만 둡니다.
#[derive(Debug, Error)]
pub enum ReportError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),
}

/// 리포트 작업을 위한 Result 타입.
pub type ReportResult<T> = Result<T, ReportError>;

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ReportError {
    fn from(err: config::ConfigError) -> Self {
        ReportError::Config(err.to_string())
    }
}
