//! Lambda entry point for property valuation, market analysis and value
//! prediction.

use chrono::Utc;
use estate_mock::application::property_valuation::{self, ValuationBody};
use estate_mock::config::MockDataEnvConfig;
use estate_mock::domain::envelope::Envelope;
use estate_mock::infrastructure::RngSource;
use estate_mock::infrastructure::observability::{LogFormat, init_tracing};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    init_tracing(LogFormat::Compact);
    tracing::trace!("initiating lambda");

    let config = MockDataEnvConfig::from_env()?;
    let rng_source = Arc::new(RngSource::from_config(&config));

    let func = service_fn(move |event: LambdaEvent<Value>| {
        let rng_source = rng_source.clone();

        async move { handler(&rng_source, event) }
    });

    run(func).await
}

#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
fn handler(
    rng_source: &RngSource,
    event: LambdaEvent<Value>,
) -> Result<Envelope<ValuationBody>, Error> {
    let mut rng = rng_source.next_rng();
    let envelope = property_valuation::handle_event(&event.payload, &mut rng, Utc::now())?;
    tracing::info!(status_code = envelope.status_code, "analysis complete");
    Ok(envelope)
}
