use crate::domain::sampling::round_currency;
use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

pub const PREDICTION_MONTHS: u32 = 12;
pub const CONFIDENCE_FLOOR: f64 = 0.5;

pub const RISK_FACTORS: [&str; 3] = [
    "Interest rate changes",
    "Local market conditions",
    "Economic indicators",
];

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyPrediction {
    pub month: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub predicted_value: Decimal,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValuePrediction {
    pub property_id: Value,
    pub current_value: i64,
    pub predictions: Vec<MonthlyPrediction>,
    /// Display figure in percent. Independent of the rate used to compound
    /// `predictions`.
    pub annual_growth_rate: f64,
    pub risk_factors: Vec<&'static str>,
    pub prediction_date: DateTime<Utc>,
}

/// Linear decay from 0.95, floored at [`CONFIDENCE_FLOOR`].
pub fn confidence_for_month(month: u32) -> f64 {
    (0.95 - month as f64 * 0.05).max(CONFIDENCE_FLOOR)
}

/// Compound `current_value` monthly at `growth_rate` for `months` steps.
pub fn project_values(
    current_value: f64,
    growth_rate: f64,
    months: u32,
) -> Vec<MonthlyPrediction> {
    (1..=months)
        .map(|month| {
            let compounded = current_value * (1.0 + growth_rate).powi(month as i32);
            MonthlyPrediction {
                month,
                predicted_value: round_currency(compounded),
                confidence: confidence_for_month(month),
            }
        })
        .collect()
}

pub fn predict_value<R: Rng + ?Sized>(
    property_id: &Value,
    rng: &mut R,
    now: DateTime<Utc>,
) -> ValuePrediction {
    let current_value: i64 = rng.random_range(400_000..=700_000);
    let growth_rate = rng.random_range(0.002..=0.008);
    let predictions = project_values(current_value as f64, growth_rate, PREDICTION_MONTHS);

    ValuePrediction {
        property_id: property_id.clone(),
        current_value,
        predictions,
        annual_growth_rate: rng.random_range(3.0..=8.0),
        risk_factors: RISK_FACTORS.to_vec(),
        prediction_date: now,
    }
}
