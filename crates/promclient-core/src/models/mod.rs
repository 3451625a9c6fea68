//! 쿼리 API 도메인 모델.
//!
//! 응답 envelope, 쿼리 결과, 시리즈/라벨 메타데이터, 타깃 상태를 정의한다.
//! 모든 모델은 응답마다 새로 생성되며 호출자가 단독 소유한다.

pub mod envelope;
pub mod metadata;
pub mod query;
pub mod target;

use serde::{Deserialize, Deserializer};

/// 명시적 `null`도 키 누락과 같이 기본값으로 디코딩
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
