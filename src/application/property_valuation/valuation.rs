use crate::domain::sampling::{days_before, round_currency};
use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

pub const COMPARABLE_SALES: usize = 5;

/// Multipliers applied to the base value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValuationFactors {
    pub market_adjustment: f64,
    pub location_factor: f64,
    pub condition_factor: f64,
}

impl ValuationFactors {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            market_adjustment: rng.random_range(0.95..=1.15),
            location_factor: rng.random_range(0.9..=1.2),
            condition_factor: rng.random_range(0.85..=1.1),
        }
    }

    pub fn apply(&self, base_value: f64) -> f64 {
        base_value * self.market_adjustment * self.location_factor * self.condition_factor
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparableSale {
    pub address: String,
    pub sold_price: i64,
    pub sold_date: DateTime<Utc>,
    pub sqft: u32,
    pub beds: u8,
    pub baths: u8,
}

impl ComparableSale {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Self {
        Self {
            address: format!("{} Main St", rng.random_range(100..=999)),
            sold_price: rng.random_range(280_000..=750_000),
            sold_date: days_before(now, rng.random_range(1..=90)),
            sqft: rng.random_range(1_200..=3_500),
            beds: rng.random_range(2..=5),
            baths: rng.random_range(1..=4),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValueRange {
    #[serde(with = "rust_decimal::serde::float")]
    pub low: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub high: Decimal,
}

impl ValueRange {
    /// ±10% band around the unrounded estimate.
    pub fn around(value: f64) -> Self {
        Self {
            low: round_currency(value * 0.9),
            high: round_currency(value * 1.1),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyValuation {
    pub property_id: Value,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_value: Decimal,
    pub confidence_score: f64,
    pub valuation_date: DateTime<Utc>,
    pub factors: ValuationFactors,
    pub comparables: Vec<ComparableSale>,
    pub value_range: ValueRange,
}

pub fn value_property<R: Rng + ?Sized>(
    property_id: &Value,
    rng: &mut R,
    now: DateTime<Utc>,
) -> PropertyValuation {
    let base_value: i64 = rng.random_range(300_000..=800_000);
    let factors = ValuationFactors::sample(rng);
    let estimate = factors.apply(base_value as f64);

    let comparables = (0..COMPARABLE_SALES)
        .map(|_| ComparableSale::sample(rng, now))
        .collect();

    PropertyValuation {
        property_id: property_id.clone(),
        current_value: round_currency(estimate),
        confidence_score: rng.random_range(0.75..=0.95),
        valuation_date: now,
        factors,
        comparables,
        value_range: ValueRange::around(estimate),
    }
}
