//! 샘플 값, 라벨 값 디코딩.
//!
//! 둘 다 실패해도 에러를 내지 않는다. 잘못된 값 하나가 시리즈 전체를
//! 버리게 만들지 않도록 대체값으로 채운다.

use serde_json::{Map, Value};

use crate::models::query::Metric;

/// 문자열이 아닌 라벨 값 대신 들어가는 표시 문자열
pub const UNSUPPORTED_LABEL: &str = "Unsupported";

/// 문자열 샘플 값을 f64로 변환
///
/// `"+Inf"`만 명시적으로 처리한다. `"-Inf"`, `"NaN"`은 일반 float 파싱에
/// 맡기며 (각각 -∞, NaN으로 해석됨) 파싱 불가한 값은 `0.0`.
pub fn to_value(raw: &str) -> f64 {
    if raw == "+Inf" {
        return f64::INFINITY;
    }
    raw.parse().unwrap_or(0.0)
}

/// 라벨 객체를 `Metric`으로 변환. 문자열이 아닌 값은 [`UNSUPPORTED_LABEL`]로 대체
pub fn to_metric(raw: &Map<String, Value>) -> Metric {
    raw.iter()
        .map(|(name, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                _ => UNSUPPORTED_LABEL.to_string(),
            };
            (name.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_value_special_and_plain() {
        assert_eq!(to_value("+Inf"), f64::INFINITY);
        assert_eq!(to_value("3.5"), 3.5);
        assert_eq!(to_value("1e3"), 1000.0);
        assert_eq!(to_value("-2"), -2.0);
    }

    #[test]
    fn to_value_garbage_is_zero() {
        assert_eq!(to_value("garbage"), 0.0);
        assert_eq!(to_value(""), 0.0);
        assert_eq!(to_value(" 1"), 0.0);
    }

    #[test]
    fn to_value_negative_inf_and_nan_fall_through() {
        assert_eq!(to_value("-Inf"), f64::NEG_INFINITY);
        assert!(to_value("NaN").is_nan());
    }

    #[test]
    fn to_metric_substitutes_non_strings() {
        let raw = json!({"job": "x", "code": 200, "flag": true, "none": null});
        let metric = to_metric(raw.as_object().unwrap());

        assert_eq!(metric.len(), 4);
        assert_eq!(metric["job"], "x");
        assert_eq!(metric["code"], UNSUPPORTED_LABEL);
        assert_eq!(metric["flag"], UNSUPPORTED_LABEL);
        assert_eq!(metric["none"], UNSUPPORTED_LABEL);
    }
}
