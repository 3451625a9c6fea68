//! 쿼리 API 포트.
//!
//! 각 연산은 요청 한 번으로 끝나며 재시도, 캐시는 하지 않는다.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::PromError;
use crate::models::metadata::{LabelNames, LabelValues, SeriesDescriptor};
use crate::models::query::QueryResult;
use crate::models::target::{TargetSnapshot, TargetState};

/// 메타데이터 조회용 선택적 시간 범위 (Unix 초)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeRange {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// 범위 제한 없음 (서버 기본값 사용)
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// range 쿼리 요청
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    /// PromQL 표현식
    pub query: String,
    /// 시작 시각 (Unix 초)
    pub start: f64,
    /// 종료 시각 (Unix 초)
    pub end: f64,
    /// 해상도 step. `None`이면 클라이언트 기본값 (30초)
    pub step: Option<Duration>,
    /// 평가 타임아웃. `None`이면 클라이언트 기본값
    pub timeout: Option<Duration>,
}

impl RangeQuery {
    pub fn new(query: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            query: query.into(),
            start,
            end,
            step: None,
            timeout: None,
        }
    }

    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Prometheus 쿼리 API 클라이언트
#[async_trait]
pub trait QueryApi: Send + Sync {
    /// 단일 시각 instant 쿼리 (`/api/v1/query`)
    ///
    /// `time`은 Unix 초 (소수점 허용). `timeout`이 `None`이면 클라이언트 기본값.
    async fn instant_query(
        &self,
        query: &str,
        time: f64,
        timeout: Option<Duration>,
    ) -> Result<Vec<QueryResult>, PromError>;

    /// 시간 범위 range 쿼리 (`/api/v1/query_range`)
    async fn range_query(&self, request: &RangeQuery) -> Result<Vec<QueryResult>, PromError>;

    /// 라벨 매처로 시리즈 검색 (`/api/v1/series`)
    async fn find_series(
        &self,
        matches: &[String],
        range: TimeRange,
    ) -> Result<Vec<SeriesDescriptor>, PromError>;

    /// 라벨 이름 목록 (`/api/v1/labels`)
    async fn label_names(
        &self,
        matches: &[String],
        range: TimeRange,
    ) -> Result<LabelNames, PromError>;

    /// 특정 라벨의 값 목록 (`/api/v1/label/<name>/values`)
    async fn label_values(
        &self,
        label: &str,
        matches: &[String],
        range: TimeRange,
    ) -> Result<LabelValues, PromError>;

    /// 타깃 디스커버리 상태 (`/api/v1/targets`)
    async fn targets(&self, state: TargetState) -> Result<TargetSnapshot, PromError>;
}
