//! Property valuation entry point.
//!
//! Routes `analysis_type` to the valuation, market analysis or value
//! prediction generator. `property_id` is passed through untouched.

pub mod market_analysis;
pub mod prediction;
pub mod valuation;

pub use market_analysis::{MarketAnalysis, analyze_market};
pub use prediction::{ValuePrediction, predict_value};
pub use valuation::{PropertyValuation, value_property};

use crate::domain::envelope::{Envelope, ErrorBody};
use crate::domain::errors::RequestError;
use crate::domain::request::{AnalysisKind, ValuationRequest};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ValuationBody {
    Valuation(PropertyValuation),
    MarketAnalysis(MarketAnalysis),
    Prediction(ValuePrediction),
    Error(ErrorBody),
}

#[tracing::instrument(skip_all, fields(selector = %request.selector))]
pub fn dispatch<R: Rng + ?Sized>(
    request: &ValuationRequest,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Envelope<ValuationBody> {
    let kind = match request.kind() {
        Ok(kind) => kind,
        Err(err) => {
            warn!(selector = %err.selector(), "Rejected valuation request: {}", err);
            return Envelope::bad_request(ValuationBody::Error(ErrorBody::from(&err)));
        }
    };

    debug!(%kind, property_id = %request.property_id, "Generating analysis");

    let property_id = &request.property_id;
    let body = match kind {
        AnalysisKind::Valuation => ValuationBody::Valuation(value_property(property_id, rng, now)),
        AnalysisKind::MarketAnalysis => {
            ValuationBody::MarketAnalysis(analyze_market(property_id, rng, now))
        }
        AnalysisKind::Prediction => {
            ValuationBody::Prediction(predict_value(property_id, rng, now))
        }
    };

    Envelope::ok(body)
}

pub fn handle_event<R: Rng + ?Sized>(
    event: &Value,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<Envelope<ValuationBody>, RequestError> {
    let request = ValuationRequest::try_from(event)?;
    Ok(dispatch(&request, rng, now))
}
