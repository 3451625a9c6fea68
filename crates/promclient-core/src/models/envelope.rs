//! 응답 envelope 모델.
//!
//! 모든 쿼리 API 응답의 공통 외곽 구조.
//! <https://prometheus.io/docs/prometheus/latest/querying/api/#format-overview>

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 응답 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
    /// 그 밖의 값. 실패로 취급
    #[serde(other)]
    Other,
}

/// 응답 envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// "success"가 아니면 모두 실패
    pub status: ResponseStatus,
    /// 결과 payload. `status=error`일 때 존재하더라도 신뢰하지 않는다
    #[serde(default)]
    pub data: Option<Value>,
    /// `status=error`일 때만 설정됨
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// `status=error`일 때만 설정됨
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 실행 중 발생한 경고. 성공 응답에도 포함될 수 있음
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub warnings: Vec<String>,
}

/// envelope에서 꺼낸 성공 payload
///
/// `data`는 변환 전 문서 트리 상태이며 결과 변환기가 해석한다.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub data: Value,
    pub warnings: Vec<String>,
}
