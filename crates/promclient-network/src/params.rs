//! 쿼리 파라미터 조립.

use promclient_core::ports::query_api::TimeRange;
use std::time::Duration;

/// Unix 초 timestamp를 지수 표기 없는 최단 소수 문자열로 변환
///
/// `1700000000.0` → `"1700000000"`, `1700000000.5` → `"1700000000.5"`
pub fn format_timestamp(ts: f64) -> String {
    format!("{ts}")
}

/// Duration을 Prometheus duration 문자열로 변환
///
/// 정수 초는 `"30s"`, 그 외는 밀리초(`"1500ms"`)로 표기. 1ms 미만은 버림.
pub fn format_duration(duration: Duration) -> String {
    if duration.subsec_nanos() == 0 {
        format!("{}s", duration.as_secs())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// 순서가 유지되는 쿼리 파라미터 목록
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.push((key.to_string(), value.into()));
        self
    }

    pub fn timestamp(self, key: &str, ts: f64) -> Self {
        self.push(key, format_timestamp(ts))
    }

    pub fn duration(self, key: &str, duration: Duration) -> Self {
        self.push(key, format_duration(duration))
    }

    /// 시리즈 셀렉터마다 `match[]` 반복
    pub fn matches(self, selectors: &[String]) -> Self {
        selectors
            .iter()
            .fold(self, |params, selector| params.push("match[]", selector.as_str()))
    }

    /// 지정된 경계만 `start`/`end`로 추가
    pub fn range(self, range: TimeRange) -> Self {
        let params = match range.start {
            Some(start) => self.timestamp("start", start),
            None => self,
        };
        match range.end {
            Some(end) => params.timestamp("end", end),
            None => params,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }
}
