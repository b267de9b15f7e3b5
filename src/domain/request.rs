//! Structured request types for both entry points.
//!
//! Events arrive as loosely shaped JSON objects. They are read once here:
//! the selector is captured as text (non-string selectors keep their JSON
//! rendering so they never match a known operation) and the subject id is
//! carried through untouched.

use crate::domain::errors::{DispatchError, RequestError};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_AGGREGATION_TYPE: &str = "portfolio";
pub const DEFAULT_ANALYSIS_TYPE: &str = "valuation";
pub const DEFAULT_USER_ID: &str = "1";

/// Operations served by the data aggregation entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationKind {
    Portfolio,
    Performance,
    Cashflow,
    Maintenance,
}

impl AggregationKind {
    pub const ALL: [AggregationKind; 4] = [
        AggregationKind::Portfolio,
        AggregationKind::Performance,
        AggregationKind::Cashflow,
        AggregationKind::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationKind::Portfolio => "portfolio",
            AggregationKind::Performance => "performance",
            AggregationKind::Cashflow => "cashflow",
            AggregationKind::Maintenance => "maintenance",
        }
    }
}

impl FromStr for AggregationKind {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portfolio" => Ok(AggregationKind::Portfolio),
            "performance" => Ok(AggregationKind::Performance),
            "cashflow" => Ok(AggregationKind::Cashflow),
            "maintenance" => Ok(AggregationKind::Maintenance),
            _ => Err(DispatchError::UnknownAggregationType {
                selector: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations served by the property valuation entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Valuation,
    MarketAnalysis,
    Prediction,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 3] = [
        AnalysisKind::Valuation,
        AnalysisKind::MarketAnalysis,
        AnalysisKind::Prediction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Valuation => "valuation",
            AnalysisKind::MarketAnalysis => "market_analysis",
            AnalysisKind::Prediction => "prediction",
        }
    }
}

impl FromStr for AnalysisKind {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valuation" => Ok(AnalysisKind::Valuation),
            "market_analysis" => Ok(AnalysisKind::MarketAnalysis),
            "prediction" => Ok(AnalysisKind::Prediction),
            _ => Err(DispatchError::UnknownAnalysisType {
                selector: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for the data aggregation entry point (`type`, `user_id`).
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationRequest {
    pub selector: String,
    pub user_id: Value,
}

impl AggregationRequest {
    pub fn new(selector: impl Into<String>, user_id: impl Into<Value>) -> Self {
        Self {
            selector: selector.into(),
            user_id: user_id.into(),
        }
    }

    pub fn kind(&self) -> Result<AggregationKind, DispatchError> {
        self.selector.parse()
    }
}

impl Default for AggregationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_AGGREGATION_TYPE, DEFAULT_USER_ID)
    }
}

impl TryFrom<&Value> for AggregationRequest {
    type Error = RequestError;

    fn try_from(event: &Value) -> Result<Self, Self::Error> {
        let fields = as_object(event)?;
        Ok(Self {
            selector: selector_text(fields.get("type"), DEFAULT_AGGREGATION_TYPE),
            user_id: fields
                .get("user_id")
                .cloned()
                .unwrap_or_else(|| Value::from(DEFAULT_USER_ID)),
        })
    }
}

/// Request for the property valuation entry point (`analysis_type`,
/// `property_id`). An absent `property_id` is echoed back as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRequest {
    pub selector: String,
    pub property_id: Value,
}

impl ValuationRequest {
    pub fn new(selector: impl Into<String>, property_id: impl Into<Value>) -> Self {
        Self {
            selector: selector.into(),
            property_id: property_id.into(),
        }
    }

    pub fn kind(&self) -> Result<AnalysisKind, DispatchError> {
        self.selector.parse()
    }
}

impl Default for ValuationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_ANALYSIS_TYPE, Value::Null)
    }
}

impl TryFrom<&Value> for ValuationRequest {
    type Error = RequestError;

    fn try_from(event: &Value) -> Result<Self, Self::Error> {
        let fields = as_object(event)?;
        Ok(Self {
            selector: selector_text(fields.get("analysis_type"), DEFAULT_ANALYSIS_TYPE),
            property_id: fields.get("property_id").cloned().unwrap_or(Value::Null),
        })
    }
}

fn as_object(event: &Value) -> Result<&Map<String, Value>, RequestError> {
    event.as_object().ok_or(RequestError::NotAnObject {
        found: json_kind(event),
    })
}

fn selector_text(field: Option<&Value>, default: &str) -> String {
    match field {
        None => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
