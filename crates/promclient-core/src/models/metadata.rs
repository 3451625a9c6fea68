//! 시리즈/라벨 메타데이터 모델.

use std::collections::BTreeMap;

/// 매칭된 시리즈 하나의 전체 라벨 집합
pub type SeriesDescriptor = BTreeMap<String, String>;

/// 라벨 이름 목록 (서비스 반환 순서 유지)
pub type LabelNames = Vec<String>;

/// 라벨 값 목록 (서비스 반환 순서 유지)
pub type LabelValues = Vec<String>;
