//! 전송 계층 포트.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::PromError;

/// HTTP 응답 (상태 코드 + 본문)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// HTTP GET 전송 계층
///
/// 상태 코드 해석은 하지 않는다. 연결 실패는 `PromError::Network`,
/// 시간 초과는 `PromError::Timeout`으로 반환해야 한다.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// `url`에 `params`를 쿼리 문자열로 붙여 GET 요청
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        timeout: Duration,
    ) -> Result<HttpResponse, PromError>;
}
