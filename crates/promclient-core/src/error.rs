//! promclient 에러 타입.
//!
//! 전송 실패, 디코딩 실패, 서비스 보고 에러, 스키마 불일치를 모두
//! 하나의 열거형으로 표현하며 항상 호출자에게 값으로 반환한다.

use std::time::Duration;
use thiserror::Error;

/// 쿼리 클라이언트 에러.
#[derive(Debug, Error)]
pub enum PromError {
    /// 네트워크 에러 (연결 실패, 응답 본문 읽기 실패)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 요청 타임아웃
    #[error("요청 타임아웃: {0:?} 초과")]
    Timeout(Duration),

    /// 200 이외의 HTTP 상태 코드
    #[error(
        "{code} {reason}{}",
        .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
    )]
    HttpStatus {
        /// HTTP 상태 코드
        code: u16,
        /// 상태 사유 문구 (예: "Bad Request")
        reason: String,
        /// 부가 설명 (서비스 에러 메시지 또는 상태별 설명)
        detail: Option<String>,
    },

    /// 응답 JSON 파싱 실패 또는 선언된 구조와 불일치
    #[error("응답 디코딩 실패: {0}")]
    Decode(#[from] serde_json::Error),

    /// 서비스가 `status=error`를 보고함
    #[error("쿼리 에러: type={error_type}, error={message}")]
    Query {
        /// 서비스가 보고한 에러 종류 (예: "bad_data")
        error_type: String,
        /// 서비스가 보고한 에러 메시지
        message: String,
    },

    /// `status=success`이지만 `data`가 없음
    #[error("응답에 data 없음")]
    NoData,

    /// 성공 응답의 payload에 필요한 키가 없거나 형태가 다름
    #[error("응답 스키마 불일치: {0}")]
    SchemaMismatch(String),

    /// 지원하지 않는 resultType
    #[error("지원하지 않는 resultType: {0}")]
    UnsupportedType(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),
}

impl PromError {
    /// 전송 계층 에러인지 판별 (네트워크, 타임아웃, 비정상 상태 코드)
    ///
    /// 파싱 에러와 구분해야 하는 호출자를 위한 분류.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PromError::Network(_) | PromError::Timeout(_) | PromError::HttpStatus { .. }
        )
    }

    pub(crate) fn schema(message: impl Into<String>) -> Self {
        PromError::SchemaMismatch(message.into())
    }
}
