//! HTTP 상태 코드 매핑.
//!
//! <https://prometheus.io/docs/prometheus/latest/querying/api/#format-overview>

use promclient_core::error::PromError;
use promclient_core::models::envelope::Envelope;

/// 상태 코드를 에러로 변환 (200만 성공)
///
/// 400/422/503 응답 본문에는 보통 에러 envelope가 포함되므로
/// 서비스 메시지를 우선 사용하고, 없으면 상태별 설명을 붙인다.
pub fn check_status(status: u16, body: &[u8]) -> Result<(), PromError> {
    if status == 200 {
        return Ok(());
    }

    let detail = service_error(body).or_else(|| describe(status).map(str::to_string));

    Err(PromError::HttpStatus {
        code: status,
        reason: reason_phrase(status).to_string(),
        detail,
    })
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        503 => "Service Unavailable",
        other => reqwest::StatusCode::from_u16(other)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status"),
    }
}

fn describe(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("파라미터 누락 또는 잘못됨"),
        404 => Some("API 경로를 찾을 수 없음 (서버 URL 확인)"),
        422 => Some("표현식을 실행할 수 없음"),
        503 => Some("쿼리 타임아웃 또는 중단"),
        _ => None,
    }
}

/// 본문이 에러 envelope이면 "errorType: error" 반환
fn service_error(body: &[u8]) -> Option<String> {
    let envelope: Envelope = serde_json::from_slice(body).ok()?;
    let message = envelope.error.filter(|m| !m.is_empty())?;
    Some(match envelope.error_type.filter(|t| !t.is_empty()) {
        Some(error_type) => format!("{error_type}: {message}"),
        None => message,
    })
}
