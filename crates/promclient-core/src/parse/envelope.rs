//! 응답 envelope 디코더.

use crate::error::PromError;
use crate::models::envelope::{Envelope, Payload, ResponseStatus};

/// 응답 본문을 envelope로 디코딩하고 `data` payload를 꺼낸다.
///
/// - JSON이 아니거나 envelope 형태가 아니면 `Decode`
/// - `status=error`면 서비스가 보고한 type/message 그대로 `Query`
/// - `status=success`인데 `data`가 없거나 null이면 `NoData`
pub fn decode_envelope(body: &[u8]) -> Result<Payload, PromError> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    envelope.into_payload()
}

impl Envelope {
    /// 성공 여부를 판정하고 payload를 반환
    pub fn into_payload(self) -> Result<Payload, PromError> {
        match self.status {
            ResponseStatus::Success => {
                let data = self.data.ok_or(PromError::NoData)?;
                Ok(Payload {
                    data,
                    warnings: self.warnings,
                })
            }
            // 에러 응답의 data는 신뢰하지 않음
            ResponseStatus::Error | ResponseStatus::Other => Err(PromError::Query {
                error_type: self.error_type.unwrap_or_default(),
                message: self.error.unwrap_or_default(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_returns_data_and_warnings() {
        let body = br#"{"status":"success","data":["a","b"],"warnings":["partial response"]}"#;
        let payload = decode_envelope(body).unwrap();
        assert_eq!(payload.data, json!(["a", "b"]));
        assert_eq!(payload.warnings, vec!["partial response".to_string()]);
    }

    #[test]
    fn success_without_data_is_no_data() {
        let absent = decode_envelope(br#"{"status":"success"}"#);
        assert!(matches!(absent, Err(PromError::NoData)));

        let null = decode_envelope(br#"{"status":"success","data":null}"#);
        assert!(matches!(null, Err(PromError::NoData)));
    }

    #[test]
    fn error_status_keeps_service_fields_verbatim() {
        let body = br#"{"status":"error","errorType":"bad_data","error":"parse error","data":{"x":1}}"#;
        match decode_envelope(body) {
            Err(PromError::Query {
                error_type,
                message,
            }) => {
                assert_eq!(error_type, "bad_data");
                assert_eq!(message, "parse error");
            }
            other => panic!("Query 에러 기대, 실제: {other:?}"),
        }
    }

    #[test]
    fn error_status_without_fields() {
        let err = decode_envelope(br#"{"status":"error"}"#).unwrap_err();
        assert!(matches!(
            err,
            PromError::Query { ref error_type, ref message } if error_type.is_empty() && message.is_empty()
        ));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        assert!(matches!(
            decode_envelope(b"<html>502 Bad Gateway</html>"),
            Err(PromError::Decode(_))
        ));
        // status 누락
        assert!(matches!(
            decode_envelope(br#"{"data":[]}"#),
            Err(PromError::Decode(_))
        ));
        // status가 문자열이 아님
        assert!(matches!(
            decode_envelope(br#"{"status":1,"data":[]}"#),
            Err(PromError::Decode(_))
        ));
    }

    #[test]
    fn any_non_success_status_is_query_error() {
        let body = br#"{"status":"partial","errorType":"x","error":"y","data":[]}"#;
        match decode_envelope(body) {
            Err(PromError::Query {
                error_type,
                message,
            }) => {
                assert_eq!(error_type, "x");
                assert_eq!(message, "y");
            }
            other => panic!("Query 에러 기대, 실제: {other:?}"),
        }
    }

    #[test]
    fn null_warnings_are_empty() {
        let payload =
            decode_envelope(br#"{"status":"success","data":["a"],"warnings":null}"#).unwrap();
        assert_eq!(payload.data, json!(["a"]));
        assert!(payload.warnings.is_empty());
    }
}
