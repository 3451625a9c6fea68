//! reqwest 기반 전송 계층.
//!
//! `HttpTransport` 포트 구현. 상태 코드 해석, 재시도는 하지 않는다.

use async_trait::async_trait;
use promclient_core::error::PromError;
use promclient_core::ports::transport::{HttpResponse, HttpTransport};
use std::time::Duration;
use url::Url;

/// reqwest HTTP GET 전송 계층
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// 새 전송 계층 생성
    ///
    /// `timeout`은 요청별 타임아웃이 지정되지 않았을 때의 기본값.
    pub fn new(timeout: Duration) -> Result<Self, PromError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PromError::Network(format!("HTTP 클라이언트 빌드 실패: {e}")))?;

        Ok(Self { client })
    }
}

/// reqwest 에러를 전송 에러로 변환
fn map_send_error(error: reqwest::Error, timeout: Duration) -> PromError {
    if error.is_timeout() {
        PromError::Timeout(timeout)
    } else {
        PromError::Network(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, PromError> {
        let mut url =
            Url::parse(url).map_err(|e| PromError::Config(format!("잘못된 URL {url}: {e}")))?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| map_send_error(e, timeout))?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| map_send_error(e, timeout))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
