//! 클라이언트 설정 구조체.
//!
//! 서버 URL, 요청 타임아웃, range 쿼리 기본 step을 정의한다.
//! CLI에서는 `config` crate를 통해 파일/환경변수에서 로드.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::PromError;

/// 쿼리 클라이언트 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prometheus 서버 URL (예: "http://localhost:9090")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 요청 타임아웃 (초). 쿼리 `timeout` 파라미터 기본값으로도 사용
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// range 쿼리 기본 step (초)
    #[serde(default = "default_step_secs")]
    pub default_step_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            default_step_secs: default_step_secs(),
        }
    }
}

impl ClientConfig {
    /// 지정된 서버 URL로 기본 설정 생성
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), PromError> {
        if self.base_url.trim().is_empty() {
            return Err(PromError::Config("base_url이 비어 있음".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(PromError::Config("timeout_secs는 0보다 커야 함".to_string()));
        }
        if self.default_step_secs == 0 {
            return Err(PromError::Config(
                "default_step_secs는 0보다 커야 함".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn default_step(&self) -> Duration {
        Duration::from_secs(self.default_step_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:9090".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_step_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://prom:9090"}"#).unwrap();
        assert_eq!(config.base_url, "http://prom:9090");
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.default_step(), Duration::from_secs(30));
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(ClientConfig::default().validate().is_ok());

        let empty_url = ClientConfig::with_base_url("  ");
        assert!(matches!(empty_url.validate(), Err(PromError::Config(_))));

        let zero_timeout = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(matches!(zero_timeout.validate(), Err(PromError::Config(_))));

        let zero_step = ClientConfig {
            default_step_secs: 0,
            ..ClientConfig::default()
        };
        assert!(zero_step.validate().is_err());
    }
}
