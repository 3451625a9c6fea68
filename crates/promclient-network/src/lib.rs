//! # promclient-network
//!
//! Prometheus HTTP 쿼리 API 어댑터.
//! reqwest 기반 전송 계층, HTTP 상태 코드 매핑, 쿼리 파라미터 조립을 담당하며
//! 응답 해석은 `promclient-core::parse`에 위임한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use promclient_core::config::ClientConfig;
//! use promclient_core::ports::query_api::QueryApi;
//! use promclient_network::http_client::PromHttpClient;
//!
//! let client = PromHttpClient::new(&ClientConfig::with_base_url("http://localhost:9090"))?;
//! let results = client.instant_query("up", 1_700_000_000.0, None).await?;
//! ```

pub mod http_client;
pub mod params;
pub mod status;
pub mod transport;
