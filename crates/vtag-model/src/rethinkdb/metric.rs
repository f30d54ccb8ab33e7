use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// Submission type of a collected value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    Gauge,
    MonotonicCount,
}

impl FromStr for MetricType {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "gauge" => Ok(MetricType::Gauge),
            "monotonic_count" => Ok(MetricType::MonotonicCount),
            other => Err(ModelError::UnknownMetricType(other.to_string())),
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MetricType::Gauge => "gauge",
            MetricType::MonotonicCount => "monotonic_count",
        })
    }
}

/// A single value produced by a collection function, decoupled from the check itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(rename = "type")]
    pub kind: MetricType,
    pub name: String,
    pub value: f64,
    pub tags: Vec<String>,
}

impl Metric {
    pub fn gauge(name: impl Into<String>, value: f64, tags: Vec<String>) -> Self {
        Self {
            kind: MetricType::Gauge,
            name: name.into(),
            value,
            tags,
        }
    }

    pub fn monotonic_count(name: impl Into<String>, value: f64, tags: Vec<String>) -> Self {
        Self {
            kind: MetricType::MonotonicCount,
            name: name.into(),
            value,
            tags,
        }
    }
}
