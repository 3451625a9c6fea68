//! 타깃 상태 변환기 (`/api/v1/targets`).
//!
//! 필드 단위로 추출하지 않고 문서 트리를 [`TargetSnapshot`]으로 바로 역직렬화한다.

use serde::Deserialize;
use serde_json::Value;

use crate::error::PromError;
use crate::models::target::TargetSnapshot;

/// 타깃 스냅샷 변환
///
/// 선언되지 않은 필드는 무시되고, 선언된 필드의 형태가 다르면 `Decode`.
pub fn parse_target_snapshot(payload: &Value) -> Result<TargetSnapshot, PromError> {
    Ok(TargetSnapshot::deserialize(payload)?)
}
