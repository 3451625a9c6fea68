//! 쿼리 결과 모델.
//!
//! instant 쿼리(`vector`)와 range 쿼리(`matrix`) 결과를 표현.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PromError;

/// 라벨 이름 → 라벨 값
pub type Metric = BTreeMap<String, String>;

/// 특정 시각의 샘플 값
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Unix timestamp (초, 소수점 허용)
    pub timestamp: f64,
    pub value: f64,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timestamp={} value={}", self.timestamp, self.value)
    }
}

/// 쿼리 결과 한 건 (시리즈 하나)
///
/// vector 결과는 샘플이 정확히 1개, matrix 결과는 서비스가 반환한
/// 순서(timestamp 오름차순) 그대로 유지한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub metric: Metric,
    pub samples: Vec<Sample>,
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "metric={:?} samples=[", self.metric)?;
        for (i, sample) in self.samples.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{sample}")?;
        }
        write!(f, "]")
    }
}

/// `resultType` 판별자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// instant 쿼리 결과
    Vector,
    /// range 쿼리 결과
    Matrix,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Vector => "vector",
            ResultKind::Matrix => "matrix",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultKind {
    type Err = PromError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vector" => Ok(ResultKind::Vector),
            "matrix" => Ok(ResultKind::Matrix),
            other => Err(PromError::UnsupportedType(other.to_string())),
        }
    }
}

/// `resultType`으로 구분되는 쿼리 결과
#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    Vector(Vec<QueryResult>),
    Matrix(Vec<QueryResult>),
}

impl QueryData {
    pub fn kind(&self) -> ResultKind {
        match self {
            QueryData::Vector(_) => ResultKind::Vector,
            QueryData::Matrix(_) => ResultKind::Matrix,
        }
    }

    pub fn results(&self) -> &[QueryResult] {
        match self {
            QueryData::Vector(results) | QueryData::Matrix(results) => results,
        }
    }

    pub fn into_results(self) -> Vec<QueryResult> {
        match self {
            QueryData::Vector(results) | QueryData::Matrix(results) => results,
        }
    }
}
