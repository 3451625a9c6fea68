//! Prometheus HTTP 쿼리 API 클라이언트.
//!
//! `QueryApi` 포트 구현. 요청 조립 → 전송 → 상태 코드 확인 → envelope 디코딩 →
//! 결과 변환 순서로 한 번의 요청-응답만 수행한다.

use async_trait::async_trait;
use promclient_core::config::ClientConfig;
use promclient_core::error::PromError;
use promclient_core::models::envelope::Payload;
use promclient_core::models::metadata::{LabelNames, LabelValues, SeriesDescriptor};
use promclient_core::models::query::QueryResult;
use promclient_core::models::target::{TargetSnapshot, TargetState};
use promclient_core::parse;
use promclient_core::ports::query_api::{QueryApi, RangeQuery, TimeRange};
use promclient_core::ports::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::params::QueryParams;
use crate::status::check_status;
use crate::transport::ReqwestTransport;

/// 쿼리 API 경로 접두사
const API_PREFIX: [&str; 2] = ["api", "v1"];

/// 쿼리 API 클라이언트: `QueryApi` 포트 구현
pub struct PromHttpClient {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
    timeout: Duration,
    default_step: Duration,
}

impl PromHttpClient {
    /// reqwest 전송 계층으로 새 클라이언트 생성
    pub fn new(config: &ClientConfig) -> Result<Self, PromError> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout())?);
        Self::with_transport(config, transport)
    }

    /// 지정된 전송 계층으로 클라이언트 생성
    pub fn with_transport(
        config: &ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, PromError> {
        config.validate()?;
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            PromError::Config(format!("잘못된 base_url {}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PromError::Config(format!(
                "base_url로 사용할 수 없는 URL: {}",
                config.base_url
            )));
        }

        debug!(
            base_url = %base_url,
            timeout = config.timeout_secs,
            "PromHttpClient 초기화"
        );

        Ok(Self {
            transport,
            base_url,
            timeout: config.timeout(),
            default_step: config.default_step(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// API 경로 세그먼트로 전체 URL 생성 (세그먼트는 percent-encoding)
    fn endpoint(&self, segments: &[&str]) -> Result<String, PromError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PromError::Config(format!("잘못된 base_url: {}", self.base_url)))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url.into())
    }

    /// GET 요청 후 성공 payload 반환
    ///
    /// `timeout`은 `timeout` 쿼리 파라미터 값. HTTP 타임아웃은 이보다 짧지 않게 잡는다.
    async fn request(
        &self,
        segments: &[&str],
        params: QueryParams,
        timeout: Duration,
    ) -> Result<Payload, PromError> {
        let url = self.endpoint(segments)?;
        debug!(url = %url, params = params.len(), "쿼리 API 요청");

        let response = self
            .transport
            .get(&url, params.as_slice(), timeout.max(self.timeout))
            .await?;
        check_status(response.status, &response.body)?;

        let payload = parse::decode_envelope(&response.body)?;
        for warning in &payload.warnings {
            warn!(url = %url, "쿼리 API 경고: {warning}");
        }
        Ok(payload)
    }
}

#[async_trait]
impl QueryApi for PromHttpClient {
    async fn instant_query(
        &self,
        query: &str,
        time: f64,
        timeout: Option<Duration>,
    ) -> Result<Vec<QueryResult>, PromError> {
        let timeout = timeout.unwrap_or(self.timeout);
        let params = QueryParams::new()
            .push("query", query)
            .timestamp("time", time)
            .duration("timeout", timeout);

        let payload = self.request(&["query"], params, timeout).await?;
        parse::parse_query_result(&payload.data)
    }

    async fn range_query(&self, request: &RangeQuery) -> Result<Vec<QueryResult>, PromError> {
        // 0 step은 서비스가 거부하므로 기본값 사용
        let step = request
            .step
            .filter(|step| !step.is_zero())
            .unwrap_or(self.default_step);
        let timeout = request.timeout.unwrap_or(self.timeout);
        let params = QueryParams::new()
            .push("query", request.query.as_str())
            .timestamp("start", request.start)
            .timestamp("end", request.end)
            .duration("step", step)
            .duration("timeout", timeout);

        let payload = self.request(&["query_range"], params, timeout).await?;
        parse::parse_query_result(&payload.data)
    }

    async fn find_series(
        &self,
        matches: &[String],
        range: TimeRange,
    ) -> Result<Vec<SeriesDescriptor>, PromError> {
        let params = QueryParams::new().matches(matches).range(range);
        let payload = self.request(&["series"], params, self.timeout).await?;
        parse::parse_series(&payload.data)
    }

    async fn label_names(
        &self,
        matches: &[String],
        range: TimeRange,
    ) -> Result<LabelNames, PromError> {
        let params = QueryParams::new().matches(matches).range(range);
        let payload = self.request(&["labels"], params, self.timeout).await?;
        parse::parse_label_names(&payload.data)
    }

    async fn label_values(
        &self,
        label: &str,
        matches: &[String],
        range: TimeRange,
    ) -> Result<LabelValues, PromError> {
        let params = QueryParams::new().matches(matches).range(range);
        let payload = self
            .request(&["label", label, "values"], params, self.timeout)
            .await?;
        parse::parse_label_values(&payload.data)
    }

    async fn targets(&self, state: TargetState) -> Result<TargetSnapshot, PromError> {
        let params = QueryParams::new().push("state", state.as_str());
        let payload = self.request(&["targets"], params, self.timeout).await?;
        parse::parse_target_snapshot(&payload.data)
    }
}
