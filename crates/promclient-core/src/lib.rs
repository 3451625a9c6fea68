//! # promclient-core
//!
//! Prometheus HTTP 쿼리 API 클라이언트의 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 서비스의 느슨한 JSON 응답을 강타입 결과로 변환하는 파서가 이 crate의 핵심이다.
//!
//! ## 구조
//!
//! - [`models`]: 쿼리 결과, 시리즈, 타깃 등 도메인 데이터 구조체 (serde)
//! - [`ports`]: 전송 계층/쿼리 API 포트 인터페이스 (async_trait)
//! - [`parse`]: 응답 envelope 디코더 + 결과 변환기 (순수 함수, I/O 없음)
//! - [`error`]: 에러 타입 (thiserror)
//! - [`config`]: 클라이언트 설정 구조체

pub mod config;
pub mod error;
pub mod models;
pub mod parse;
pub mod ports;
