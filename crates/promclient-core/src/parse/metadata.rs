//! 시리즈/라벨 메타데이터 변환기.

use serde_json::Value;

use super::value::to_metric;
use super::{expect_array, expect_object, type_name};
use crate::error::PromError;
use crate::models::metadata::{LabelNames, LabelValues, SeriesDescriptor};

/// `/api/v1/series` 결과 변환
///
/// 라벨 값 처리는 쿼리 결과와 동일한 정책: 문자열이 아니면 "Unsupported".
pub fn parse_series(payload: &Value) -> Result<Vec<SeriesDescriptor>, PromError> {
    expect_array(payload, "data")?
        .iter()
        .enumerate()
        .map(|(i, entry)| expect_object(entry, &format!("data[{i}]")).map(to_metric))
        .collect()
}

/// `/api/v1/labels` 결과 변환
pub fn parse_label_names(payload: &Value) -> Result<LabelNames, PromError> {
    parse_string_list(payload)
}

/// `/api/v1/label/<name>/values` 결과 변환
pub fn parse_label_values(payload: &Value) -> Result<LabelValues, PromError> {
    parse_string_list(payload)
}

fn parse_string_list(payload: &Value) -> Result<Vec<String>, PromError> {
    expect_array(payload, "data")?
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(PromError::schema(format!(
                "data[{i}]: 문자열이 아님 ({})",
                type_name(other)
            ))),
        })
        .collect()
}
