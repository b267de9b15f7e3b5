//! Data aggregation entry point.
//!
//! Routes `type` to one of the portfolio, performance, cash-flow or
//! maintenance generators and wraps the result in an [`Envelope`].

pub mod cashflow;
pub mod maintenance;
pub mod performance;
pub mod portfolio;

pub use cashflow::{CashflowReport, aggregate_cashflow};
pub use maintenance::{MaintenanceReport, aggregate_maintenance};
pub use performance::{PerformanceReport, aggregate_performance};
pub use portfolio::{PortfolioSummary, aggregate_portfolio};

use crate::domain::envelope::{Envelope, ErrorBody};
use crate::domain::errors::RequestError;
use crate::domain::request::{AggregationKind, AggregationRequest};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Body of a data aggregation envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AggregationBody {
    Portfolio(PortfolioSummary),
    Performance(PerformanceReport),
    Cashflow(CashflowReport),
    Maintenance(MaintenanceReport),
    Error(ErrorBody),
}

/// Run the operation selected by `request`.
///
/// Unknown selectors produce a 400 envelope carrying only an `error` field.
#[tracing::instrument(skip_all, fields(selector = %request.selector))]
pub fn dispatch<R: Rng + ?Sized>(
    request: &AggregationRequest,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Envelope<AggregationBody> {
    let kind = match request.kind() {
        Ok(kind) => kind,
        Err(err) => {
            warn!(selector = %err.selector(), "Rejected aggregation request: {}", err);
            return Envelope::bad_request(AggregationBody::Error(ErrorBody::from(&err)));
        }
    };

    debug!(%kind, user_id = %request.user_id, "Generating aggregation");

    let user_id = &request.user_id;
    let body = match kind {
        AggregationKind::Portfolio => {
            AggregationBody::Portfolio(aggregate_portfolio(user_id, rng, now))
        }
        AggregationKind::Performance => {
            AggregationBody::Performance(aggregate_performance(user_id, rng, now))
        }
        AggregationKind::Cashflow => {
            AggregationBody::Cashflow(aggregate_cashflow(user_id, rng, now))
        }
        AggregationKind::Maintenance => {
            AggregationBody::Maintenance(aggregate_maintenance(user_id, rng, now))
        }
    };

    Envelope::ok(body)
}

/// Read a raw event and dispatch it.
pub fn handle_event<R: Rng + ?Sized>(
    event: &Value,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<Envelope<AggregationBody>, RequestError> {
    let request = AggregationRequest::try_from(event)?;
    Ok(dispatch(&request, rng, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn run(event: Value) -> Envelope<AggregationBody> {
        let mut rng = StdRng::seed_from_u64(1);
        handle_event(&event, &mut rng, Utc::now()).unwrap()
    }

    #[test]
    fn test_default_selector_is_portfolio() {
        let envelope = run(json!({}));
        assert_eq!(envelope.status_code, 200);
        match envelope.body {
            AggregationBody::Portfolio(summary) => assert_eq!(summary.user_id, json!("1")),
            other => panic!("expected portfolio body, got {:?}", other),
        }
    }

    #[test]
    fn test_each_selector_reaches_its_operation() {
        assert!(matches!(
            run(json!({"type": "performance"})).body,
            AggregationBody::Performance(_)
        ));
        assert!(matches!(
            run(json!({"type": "cashflow"})).body,
            AggregationBody::Cashflow(_)
        ));
        assert!(matches!(
            run(json!({"type": "maintenance"})).body,
            AggregationBody::Maintenance(_)
        ));
    }

    #[test]
    fn test_unknown_selector_is_bad_request() {
        let envelope = run(json!({"type": "taxes", "user_id": "5"}));
        assert_eq!(envelope.status_code, 400);
        assert_eq!(
            envelope.body_json().unwrap(),
            json!({"error": "Invalid aggregation type"})
        );
    }

    #[test]
    fn test_non_object_event_is_request_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = handle_event(&json!("portfolio"), &mut rng, Utc::now());
        assert_eq!(
            result.unwrap_err(),
            RequestError::NotAnObject { found: "string" }
        );
    }
}
