use crate::domain::sampling::month_label;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::Serialize;
use serde_json::Value;

pub const TREND_MONTHS: usize = 12;

#[derive(Debug, Clone, Serialize)]
pub struct MarketTrend {
    pub month: String,
    pub median_price: i64,
    pub listings: u32,
    pub days_on_market: u32,
    pub price_per_sqft: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketHealth {
    Strong,
    Stable,
    Growing,
}

impl Distribution<MarketHealth> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MarketHealth {
        match rng.random_range(0..3) {
            0 => MarketHealth::Strong,
            1 => MarketHealth::Stable,
            _ => MarketHealth::Growing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuyerDemand {
    High,
    Medium,
    Low,
}

impl Distribution<BuyerDemand> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BuyerDemand {
        match rng.random_range(0..3) {
            0 => BuyerDemand::High,
            1 => BuyerDemand::Medium,
            _ => BuyerDemand::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    Hold,
    #[serde(rename = "Consider Selling")]
    ConsiderSelling,
}

impl Distribution<Recommendation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Recommendation {
        if rng.random_bool(0.5) {
            Recommendation::Hold
        } else {
            Recommendation::ConsiderSelling
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketAnalysis {
    pub property_id: Value,
    pub market_trends: Vec<MarketTrend>,
    pub market_health: MarketHealth,
    pub buyer_demand: BuyerDemand,
    /// Months of supply.
    pub inventory_level: f64,
    pub recommendation: Recommendation,
    pub analysis_date: DateTime<Utc>,
}

pub fn analyze_market<R: Rng + ?Sized>(
    property_id: &Value,
    rng: &mut R,
    now: DateTime<Utc>,
) -> MarketAnalysis {
    let market_trends = (0..TREND_MONTHS)
        .map(|i| MarketTrend {
            month: month_label(now, i),
            median_price: rng.random_range(400_000..=600_000),
            listings: rng.random_range(50..=200),
            days_on_market: rng.random_range(15..=60),
            price_per_sqft: rng.random_range(200..=400),
        })
        .collect();

    MarketAnalysis {
        property_id: property_id.clone(),
        market_trends,
        market_health: rng.random(),
        buyer_demand: rng.random(),
        inventory_level: rng.random_range(1.5..=6.5),
        recommendation: rng.random(),
        analysis_date: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    #[test]
    fn test_trends_cover_twelve_months_newest_first() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(6);
        let analysis = analyze_market(&json!(3), &mut rng, now);

        assert_eq!(analysis.market_trends.len(), 12);
        assert_eq!(analysis.market_trends[0].month, month_label(now, 0));
        assert_eq!(analysis.market_trends[11].month, month_label(now, 11));

        for trend in &analysis.market_trends {
            assert!((400_000..=600_000).contains(&trend.median_price));
            assert!((50..=200).contains(&trend.listings));
            assert!((15..=60).contains(&trend.days_on_market));
            assert!((200..=400).contains(&trend.price_per_sqft));
        }
        assert!((1.5..=6.5).contains(&analysis.inventory_level));
    }

    #[test]
    fn test_recommendation_takes_both_values() {
        let mut rng = StdRng::seed_from_u64(0);
        let draws: Vec<Recommendation> = (0..200).map(|_| rng.random()).collect();

        assert!(draws.contains(&Recommendation::Hold));
        assert!(draws.contains(&Recommendation::ConsiderSelling));
    }

    #[test]
    fn test_categorical_labels() {
        assert_eq!(
            serde_json::to_value(Recommendation::ConsiderSelling).unwrap(),
            json!("Consider Selling")
        );
        assert_eq!(serde_json::to_value(MarketHealth::Growing).unwrap(), json!("Growing"));
        assert_eq!(serde_json::to_value(BuyerDemand::Medium).unwrap(), json!("Medium"));
    }
}
