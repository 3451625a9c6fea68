//! # promclient-cli
//!
//! Prometheus 쿼리 API 명령행 클라이언트 진입점.
//! 결과는 stdout에 JSON으로, 로그는 stderr로 출력한다.

mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use promclient_core::models::target::TargetState;
use promclient_core::ports::query_api::{QueryApi, RangeQuery, TimeRange};
use promclient_network::http_client::PromHttpClient;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::settings::Overrides;

/// Prometheus HTTP 쿼리 API 클라이언트
#[derive(Parser, Debug)]
#[command(name = "promclient")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (TOML/JSON/YAML)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 서버 URL (기본: http://localhost:9090)
    #[arg(long, short = 'u')]
    url: Option<String>,

    /// 요청 타임아웃 (초)
    #[arg(long, short = 't')]
    timeout: Option<u32>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 단일 시각 instant 쿼리
    Query {
        /// PromQL 표현식
        expr: String,
        /// 평가 시각 (Unix 초, 기본: 현재)
        #[arg(long)]
        time: Option<f64>,
    },
    /// 시간 범위 range 쿼리
    Range {
        /// PromQL 표현식
        expr: String,
        /// 시작 시각 (Unix 초)
        #[arg(long)]
        start: f64,
        /// 종료 시각 (Unix 초)
        #[arg(long)]
        end: f64,
        /// 해상도 step (초, 기본: 설정값)
        #[arg(long)]
        step: Option<u64>,
    },
    /// 라벨 매처로 시리즈 검색
    Series {
        /// 시리즈 셀렉터 (1개 이상)
        #[arg(required = true)]
        matches: Vec<String>,
        #[arg(long)]
        start: Option<f64>,
        #[arg(long)]
        end: Option<f64>,
    },
    /// 라벨 이름 목록
    Labels {
        /// 시리즈 셀렉터
        matches: Vec<String>,
        #[arg(long)]
        start: Option<f64>,
        #[arg(long)]
        end: Option<f64>,
    },
    /// 라벨 값 목록
    LabelValues {
        /// 라벨 이름
        name: String,
        /// 시리즈 셀렉터
        matches: Vec<String>,
        #[arg(long)]
        start: Option<f64>,
        #[arg(long)]
        end: Option<f64>,
    },
    /// 타깃 디스커버리 상태
    Targets {
        /// active | dropped | any
        #[arg(long, default_value = "any")]
        state: TargetState,
    },
}

/// 현재 시각 (Unix 초, 밀리초 정밀도)
fn now_secs() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

/// 서브커맨드 실행 후 결과를 JSON 값으로 반환
async fn run(client: &dyn QueryApi, command: Command) -> Result<Value> {
    let value = match command {
        Command::Query { expr, time } => {
            let time = time.unwrap_or_else(now_secs);
            serde_json::to_value(client.instant_query(&expr, time, None).await?)?
        }
        Command::Range {
            expr,
            start,
            end,
            step,
        } => {
            let mut request = RangeQuery::new(expr, start, end);
            if let Some(step) = step {
                request = request.with_step(Duration::from_secs(step));
            }
            serde_json::to_value(client.range_query(&request).await?)?
        }
        Command::Series {
            matches,
            start,
            end,
        } => serde_json::to_value(
            client
                .find_series(&matches, TimeRange { start, end })
                .await?,
        )?,
        Command::Labels {
            matches,
            start,
            end,
        } => serde_json::to_value(
            client
                .label_names(&matches, TimeRange { start, end })
                .await?,
        )?,
        Command::LabelValues {
            name,
            matches,
            start,
            end,
        } => serde_json::to_value(
            client
                .label_values(&name, &matches, TimeRange { start, end })
                .await?,
        )?,
        Command::Targets { state } => serde_json::to_value(client.targets(state).await?)?,
    };
    Ok(value)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let overrides = Overrides {
        base_url: args.url,
        timeout_secs: args.timeout,
    };
    let config = settings::load(args.config.as_deref(), &overrides)?;
    debug!(base_url = %config.base_url, "설정 로드 완료");

    let client = PromHttpClient::new(&config)?;
    let output = run(&client, args.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
