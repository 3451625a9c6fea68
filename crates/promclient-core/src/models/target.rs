//! 타깃 디스커버리 상태 모델.
//!
//! `/api/v1/targets` 응답 구조. 선언되지 않은 필드는 디코딩 시 버려진다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PromError;

/// 타깃 상태 필터
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetState {
    Active,
    Dropped,
    #[default]
    Any,
}

impl TargetState {
    /// 쿼리 파라미터 값
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetState::Active => "active",
            TargetState::Dropped => "dropped",
            TargetState::Any => "any",
        }
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetState {
    type Err = PromError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TargetState::Active),
            "dropped" => Ok(TargetState::Dropped),
            "any" | "" => Ok(TargetState::Any),
            other => Err(PromError::Config(format!(
                "알 수 없는 타깃 상태: {other} (active|dropped|any)"
            ))),
        }
    }
}

/// 타깃 건강 상태
///
/// 값은 서비스가 정의하며 클라이언트는 검증하지 않는다.
/// `up`/`down`/`unknown` 이외의 문자열은 `Other`에 그대로 보존.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetHealth {
    Up,
    Down,
    #[default]
    Unknown,
    Other(String),
}

impl TargetHealth {
    pub fn as_str(&self) -> &str {
        match self {
            TargetHealth::Up => "up",
            TargetHealth::Down => "down",
            TargetHealth::Unknown => "unknown",
            TargetHealth::Other(raw) => raw,
        }
    }
}

impl From<String> for TargetHealth {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "up" => TargetHealth::Up,
            "down" => TargetHealth::Down,
            "unknown" => TargetHealth::Unknown,
            _ => TargetHealth::Other(raw),
        }
    }
}

impl From<TargetHealth> for String {
    fn from(health: TargetHealth) -> Self {
        match health {
            TargetHealth::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TargetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 활성 타깃 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTarget {
    /// relabel 적용 전 라벨
    #[serde(default)]
    pub discovered_labels: BTreeMap<String, String>,
    /// relabel 적용 후 라벨
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub scrape_pool: String,
    #[serde(default)]
    pub scrape_url: String,
    #[serde(default)]
    pub global_url: String,
    /// 마지막 스크레이프 에러 (성공 시 빈 문자열)
    #[serde(default)]
    pub last_error: String,
    /// 마지막 스크레이프 시각 (RFC 3339)
    #[serde(default)]
    pub last_scrape: Option<DateTime<Utc>>,
    /// 마지막 스크레이프 소요 시간 (초)
    #[serde(default)]
    pub last_scrape_duration: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub health: TargetHealth,
    /// 스크레이프 주기 (예: "15s")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrape_interval: Option<String>,
    /// 스크레이프 타임아웃 (예: "10s")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrape_timeout: Option<String>,
}

/// relabel 단계에서 제외된 타깃
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedTarget {
    #[serde(default)]
    pub discovered_labels: BTreeMap<String, String>,
}

/// 타깃 디스커버리 스냅샷
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSnapshot {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub active_targets: Vec<ActiveTarget>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub dropped_targets: Vec<DroppedTarget>,
}
