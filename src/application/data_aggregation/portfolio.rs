use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

pub const PORTFOLIO_SIZE: u32 = 12;

#[derive(Debug, Clone, Serialize)]
pub struct PropertyRecord {
    pub property_id: u32,
    pub current_value: i64,
    pub monthly_income: i64,
    pub monthly_expenses: i64,
    pub occupancy_rate: f64,
    pub last_updated: DateTime<Utc>,
}

/// Portfolio-wide statistics over a freshly generated set of properties.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub user_id: Value,
    pub total_properties: usize,
    pub total_value: i64,
    pub total_monthly_income: i64,
    pub total_monthly_expenses: i64,
    pub net_monthly_income: i64,
    pub average_occupancy: f64,
    /// Annualized net income as a percentage of total value.
    pub portfolio_roi: f64,
    pub properties: Vec<PropertyRecord>,
    pub aggregation_date: DateTime<Utc>,
}

impl PortfolioSummary {
    /// Build the aggregates from the given records.
    pub fn from_properties(
        user_id: Value,
        properties: Vec<PropertyRecord>,
        now: DateTime<Utc>,
    ) -> Self {
        let total_value: i64 = properties.iter().map(|p| p.current_value).sum();
        let total_monthly_income: i64 = properties.iter().map(|p| p.monthly_income).sum();
        let total_monthly_expenses: i64 = properties.iter().map(|p| p.monthly_expenses).sum();
        let net_monthly_income = total_monthly_income - total_monthly_expenses;

        let average_occupancy = if properties.is_empty() {
            0.0
        } else {
            properties.iter().map(|p| p.occupancy_rate).sum::<f64>() / properties.len() as f64
        };

        let portfolio_roi = if total_value == 0 {
            0.0
        } else {
            (net_monthly_income as f64 * 12.0 / total_value as f64) * 100.0
        };

        Self {
            user_id,
            total_properties: properties.len(),
            total_value,
            total_monthly_income,
            total_monthly_expenses,
            net_monthly_income,
            average_occupancy,
            portfolio_roi,
            properties,
            aggregation_date: now,
        }
    }
}

pub fn aggregate_portfolio<R: Rng + ?Sized>(
    user_id: &Value,
    rng: &mut R,
    now: DateTime<Utc>,
) -> PortfolioSummary {
    let properties = (1..=PORTFOLIO_SIZE)
        .map(|property_id| PropertyRecord {
            property_id,
            current_value: rng.random_range(300_000..=800_000),
            monthly_income: rng.random_range(2_000..=5_000),
            monthly_expenses: rng.random_range(500..=1_500),
            occupancy_rate: rng.random_range(0.85..=1.0),
            last_updated: now,
        })
        .collect();

    PortfolioSummary::from_properties(user_id.clone(), properties, now)
}
