//! 응답 파서.
//!
//! 1. [`envelope`]: 응답 바이트를 envelope로 디코딩하고 성공/실패를 판정
//! 2. [`result`], [`metadata`], [`target`]: `data` 문서 트리를 기대하는
//!    형태의 강타입 결과로 변환
//!
//! 모든 함수는 입력만으로 결과가 결정되는 순수 함수이며 로그를 남기지 않는다.
//! 샘플 값, 라벨 값 디코딩 실패는 에러가 아니라 대체값으로 처리한다 ([`value`]).

pub mod envelope;
pub mod metadata;
pub mod result;
pub mod target;
pub mod value;

use serde_json::{Map, Value};

use crate::error::PromError;

pub use envelope::decode_envelope;
pub use metadata::{parse_label_names, parse_label_values, parse_series};
pub use result::{parse_query_data, parse_query_result};
pub use target::parse_target_snapshot;
pub use value::{to_metric, to_value, UNSUPPORTED_LABEL};

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, PromError> {
    value
        .as_object()
        .ok_or_else(|| PromError::schema(format!("{path}: 객체가 아님 ({})", type_name(value))))
}

fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, PromError> {
    value
        .as_array()
        .ok_or_else(|| PromError::schema(format!("{path}: 배열이 아님 ({})", type_name(value))))
}

fn require<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Value, PromError> {
    object
        .get(key)
        .ok_or_else(|| PromError::schema(format!("{path}: '{key}' 키 누락")))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
