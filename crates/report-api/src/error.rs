//! 통합 API 에러 응답 타입.
//!
//! 모든 API 엔드포인트에서 일관된 에러 형식을 제공합니다.
//!
//! # 상태 코드 매핑
//!
//! - 사용자 입력 오류 (잘못된 티커/날짜/자본금) → `400 Bad Request`
//! - 업스트림 데이터 제공자 장애/결측 → `502 Bad Gateway`
//! - 그 외 내부 오류 → `500 Internal Server Error`

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use report_data::DataError;

/// 통합 API 에러 응답.
///
/// # 예시
///
/// ```json
/// {
///   "code": "INVALID_TICKER",
///   "message": "유니버스에 없는 티커입니다: AAPL",
///   "timestamp": 1738300800
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "INVALID_TICKER", "UPSTREAM_ERROR")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 추가 에러 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// 에러 발생 타임스탬프 (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ApiErrorResponse {
    /// 기본 에러 생성 (타임스탬프 포함).
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// 상세 정보 포함 에러 생성.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            details: Some(details),
            ..Self::new(code, message)
        }
    }
}

/// 핸들러 공통 결과 타입.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 400 Bad Request 에러를 만듭니다.
pub fn bad_request(
    code: &str,
    message: impl Into<String>,
) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiErrorResponse::new(code, message)),
    )
}

/// 500 Internal Server Error 에러를 만듭니다.
pub fn internal_error(
    code: &str,
    message: impl Into<String>,
) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse::new(code, message)),
    )
}

/// 데이터 계층 에러를 HTTP 응답으로 변환합니다.
///
/// 모든 Provider 장애는 이 서버가 아닌 업스트림의 실패이므로
/// 502로 보고합니다.
pub fn from_data_error(err: DataError) -> (StatusCode, Json<ApiErrorResponse>) {
    let (code, status) = match &err {
        DataError::NoData { .. } => ("NO_DATA", StatusCode::BAD_GATEWAY),
        DataError::FetchError(_) => ("UPSTREAM_ERROR", StatusCode::BAD_GATEWAY),
        DataError::ParseError(_) => ("UPSTREAM_ERROR", StatusCode::BAD_GATEWAY),
        DataError::InvalidData(_) => ("UPSTREAM_ERROR", StatusCode::BAD_GATEWAY),
        DataError::ConfigError(_) => ("INTERNAL_ERROR", StatusCode::INTERNAL_SERVER_ERROR),
    };

    (status, Json(ApiErrorResponse::new(code, err.to_string())))
}
