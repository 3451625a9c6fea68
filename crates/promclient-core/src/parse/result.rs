//! 쿼리 결과 변환기 (`/api/v1/query`, `/api/v1/query_range`).
//!
//! `data`는 `{"resultType": ..., "result": [...]}` 형태이며 `resultType`에 따라
//! `result` 항목의 형태가 다르다:
//!
//! - `vector`: `{"metric": {...}, "value": [ts, "v"]}`
//! - `matrix`: `{"metric": {...}, "values": [[ts, "v"], ...]}`

use serde_json::{Map, Value};

use super::value::{to_metric, to_value};
use super::{expect_array, expect_object, require};
use crate::error::PromError;
use crate::models::query::{Metric, QueryData, QueryResult, ResultKind, Sample};

/// 쿼리 결과를 시리즈 목록으로 변환
pub fn parse_query_result(payload: &Value) -> Result<Vec<QueryResult>, PromError> {
    parse_query_data(payload).map(QueryData::into_results)
}

/// 쿼리 결과를 `resultType`별 variant로 변환
///
/// `resultType`/`result` 키가 없으면 `SchemaMismatch`,
/// vector/matrix 이외의 `resultType`은 `UnsupportedType`.
pub fn parse_query_data(payload: &Value) -> Result<QueryData, PromError> {
    let data = expect_object(payload, "data")?;
    let result_type = require(data, "resultType", "data")?;
    let result = require(data, "result", "data")?;

    let kind: ResultKind = match result_type {
        Value::String(s) => s.parse()?,
        other => return Err(PromError::UnsupportedType(other.to_string())),
    };
    let entries = expect_array(result, "data.result")?;

    match kind {
        ResultKind::Vector => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| parse_vector_entry(entry, i))
            .collect::<Result<Vec<_>, _>>()
            .map(QueryData::Vector),
        ResultKind::Matrix => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| parse_matrix_entry(entry, i))
            .collect::<Result<Vec<_>, _>>()
            .map(QueryData::Matrix),
    }
}

fn parse_vector_entry(entry: &Value, index: usize) -> Result<QueryResult, PromError> {
    let path = format!("data.result[{index}]");
    let entry = expect_object(entry, &path)?;
    let metric = parse_metric(entry, &path)?;
    let value = require(entry, "value", &path)?;

    Ok(QueryResult {
        metric,
        samples: vec![parse_sample(value, &format!("{path}.value"))?],
    })
}

fn parse_matrix_entry(entry: &Value, index: usize) -> Result<QueryResult, PromError> {
    let path = format!("data.result[{index}]");
    let entry = expect_object(entry, &path)?;
    let metric = parse_metric(entry, &path)?;
    let values = expect_array(
        require(entry, "values", &path)?,
        &format!("{path}.values"),
    )?;

    // 서비스가 반환한 순서 유지 (재정렬하지 않음)
    let samples = values
        .iter()
        .enumerate()
        .map(|(i, pair)| parse_sample(pair, &format!("{path}.values[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QueryResult { metric, samples })
}

fn parse_metric(entry: &Map<String, Value>, path: &str) -> Result<Metric, PromError> {
    let metric = require(entry, "metric", path)?;
    Ok(to_metric(expect_object(metric, &format!("{path}.metric"))?))
}

/// `[timestamp, "value"]` 쌍을 샘플로 변환
fn parse_sample(raw: &Value, path: &str) -> Result<Sample, PromError> {
    let pair = expect_array(raw, path)?;
    let [timestamp, value] = pair.as_slice() else {
        return Err(PromError::schema(format!(
            "{path}: [timestamp, value] 쌍이 아님 (길이 {})",
            pair.len()
        )));
    };

    let timestamp = timestamp
        .as_f64()
        .ok_or_else(|| PromError::schema(format!("{path}[0]: timestamp가 숫자가 아님")))?;
    let value = value
        .as_str()
        .ok_or_else(|| PromError::schema(format!("{path}[1]: 값이 문자열이 아님")))?;

    Ok(Sample {
        timestamp,
        value: to_value(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vector_one_result_per_entry_with_single_sample() {
        let payload = json!({
            "resultType": "vector",
            "result": [
                {"metric": {"__name__": "up", "job": "prometheus"}, "value": [1700000000.0, "1"]},
                {"metric": {"__name__": "up", "job": "node"}, "value": [1700000000.5, "0"]},
                {"metric": {}, "value": [1700000001, "+Inf"]}
            ]
        });

        let data = parse_query_data(&payload).unwrap();
        assert_eq!(data.kind(), ResultKind::Vector);

        let results = data.into_results();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.samples.len() == 1));
        assert_eq!(results[1].metric["job"], "node");
        assert_eq!(
            results[1].samples[0],
            Sample {
                timestamp: 1_700_000_000.5,
                value: 0.0
            }
        );
        // 정수 timestamp도 허용
        assert_eq!(results[2].samples[0].timestamp, 1_700_000_001.0);
        assert_eq!(results[2].samples[0].value, f64::INFINITY);
        assert!(results[2].metric.is_empty());
    }

    #[test]
    fn matrix_preserves_input_order() {
        // 의도적으로 timestamp 역순
        let payload = json!({
            "resultType": "matrix",
            "result": [{
                "metric": {"__name__": "http_requests_total"},
                "values": [[1700000060, "3"], [1700000000, "1"], [1700000030, "2"]]
            }]
        });

        let results = parse_query_result(&payload).unwrap();
        assert_eq!(results.len(), 1);
        let timestamps: Vec<f64> = results[0].samples.iter().map(|s| s.timestamp).collect();
        assert_eq!(timestamps, vec![1_700_000_060.0, 1_700_000_000.0, 1_700_000_030.0]);
        let values: Vec<f64> = results[0].samples.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn matrix_with_empty_values() {
        let payload = json!({
            "resultType": "matrix",
            "result": [{"metric": {"job": "a"}, "values": []}]
        });
        let results = parse_query_result(&payload).unwrap();
        assert!(results[0].samples.is_empty());
    }

    #[test]
    fn empty_result_list() {
        let payload = json!({"resultType": "vector", "result": []});
        assert!(parse_query_result(&payload).unwrap().is_empty());
    }

    #[test]
    fn unparsable_value_and_label_degrade_leniently() {
        let payload = json!({
            "resultType": "vector",
            "result": [{"metric": {"job": "x", "code": 200}, "value": [1, "garbage"]}]
        });
        let results = parse_query_result(&payload).unwrap();
        assert_eq!(results[0].metric["job"], "x");
        assert_eq!(results[0].metric["code"], "Unsupported");
        assert_eq!(results[0].samples[0].value, 0.0);
    }

    #[test]
    fn missing_discriminant_keys_is_schema_mismatch() {
        let no_type = json!({"result": []});
        assert!(matches!(
            parse_query_result(&no_type),
            Err(PromError::SchemaMismatch(_))
        ));

        let no_result = json!({"resultType": "vector"});
        assert!(matches!(
            parse_query_result(&no_result),
            Err(PromError::SchemaMismatch(_))
        ));

        let not_object = json!(["up"]);
        assert!(matches!(
            parse_query_result(&not_object),
            Err(PromError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn unknown_result_type_is_unsupported() {
        let scalar = json!({"resultType": "scalar", "result": [1700000000, "1"]});
        assert!(matches!(
            parse_query_result(&scalar),
            Err(PromError::UnsupportedType(ref t)) if t == "scalar"
        ));

        let numeric = json!({"resultType": 3, "result": []});
        assert!(matches!(
            parse_query_result(&numeric),
            Err(PromError::UnsupportedType(_))
        ));
    }

    #[test]
    fn entry_missing_keys_is_schema_mismatch() {
        // vector인데 values 키 사용
        let payload = json!({
            "resultType": "vector",
            "result": [{"metric": {}, "values": [[1, "1"]]}]
        });
        let err = parse_query_result(&payload).unwrap_err();
        match err {
            PromError::SchemaMismatch(msg) => assert!(msg.contains("'value'")),
            other => panic!("SchemaMismatch 기대, 실제: {other:?}"),
        }

        let no_metric = json!({
            "resultType": "matrix",
            "result": [{"values": []}]
        });
        assert!(matches!(
            parse_query_result(&no_metric),
            Err(PromError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn malformed_sample_pair_is_schema_mismatch() {
        for value in [json!([1]), json!(["1", "1"]), json!([1, 1]), json!("1")] {
            let payload = json!({
                "resultType": "vector",
                "result": [{"metric": {}, "value": value}]
            });
            assert!(
                matches!(parse_query_result(&payload), Err(PromError::SchemaMismatch(_))),
                "value={value}"
            );
        }
    }
}
