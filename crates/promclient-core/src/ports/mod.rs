//! 포트 인터페이스 (trait).
//!
//! - [`transport`]: HTTP GET 한 번을 수행하는 전송 계층
//! - [`query_api`]: 쿼리 API 연산 (instant/range/series/labels/targets)
//!
//! 구현: `promclient-network` crate (reqwest).
//! 모든 async trait은 `async_trait` 매크로로 object safety를 보장한다.

pub mod query_api;
pub mod transport;
