//! 설정 로드.
//!
//! 우선순위: 명령행 인자 > 환경변수(`PROMCLIENT_*`) > 설정 파일 > 기본값.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use promclient_core::config::ClientConfig;
use std::path::Path;

/// 환경변수 접두사 (예: `PROMCLIENT_BASE_URL`)
const ENV_PREFIX: &str = "PROMCLIENT";

/// 명령행에서 지정한 설정 덮어쓰기
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u32>,
}

/// 설정 파일(선택), 환경변수, 명령행 인자를 합쳐 `ClientConfig` 생성
pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<ClientConfig> {
    load_with_env(path, overrides, Environment::with_prefix(ENV_PREFIX))
}

fn load_with_env(
    path: Option<&Path>,
    overrides: &Overrides,
    env: Environment,
) -> Result<ClientConfig> {
    let mut builder = Config::builder();

    // 명시적으로 지정한 파일은 반드시 존재해야 함
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }
    builder = builder.add_source(env.try_parsing(true));

    if let Some(base_url) = &overrides.base_url {
        builder = builder.set_override("base_url", base_url.as_str())?;
    }
    if let Some(timeout) = overrides.timeout_secs {
        builder = builder.set_override("timeout_secs", i64::from(timeout))?;
    }

    let config: ClientConfig = builder
        .build()
        .context("설정 로드 실패")?
        .try_deserialize()
        .context("설정 형식 오류")?;
    config.validate()?;
    Ok(config)
}
