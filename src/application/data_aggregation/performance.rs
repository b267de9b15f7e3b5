use crate::domain::sampling::month_label;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

pub const PERFORMANCE_MONTHS: usize = 12;

/// Headline ratios, all in percent except the rent multiplier.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceMetrics {
    pub ytd_return: f64,
    pub mtd_return: f64,
    pub total_roi: f64,
    pub cash_on_cash_return: f64,
    pub cap_rate: f64,
    pub gross_rent_multiplier: f64,
}

impl PerformanceMetrics {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            ytd_return: rng.random_range(5.0..=15.0),
            mtd_return: rng.random_range(-2.0..=5.0),
            total_roi: rng.random_range(6.0..=12.0),
            cash_on_cash_return: rng.random_range(5.0..=10.0),
            cap_rate: rng.random_range(4.0..=8.0),
            gross_rent_multiplier: rng.random_range(8.0..=15.0),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyPerformance {
    pub month: String,
    pub revenue: i64,
    pub expenses: i64,
    /// Sampled on its own; not revenue minus expenses.
    pub net_income: i64,
    pub occupancy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyHighlight {
    pub id: u32,
    pub name: &'static str,
    pub roi: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub user_id: Value,
    pub metrics: PerformanceMetrics,
    pub monthly_performance: Vec<MonthlyPerformance>,
    pub best_performing_property: PropertyHighlight,
    pub worst_performing_property: PropertyHighlight,
    pub calculation_date: DateTime<Utc>,
}

pub fn aggregate_performance<R: Rng + ?Sized>(
    user_id: &Value,
    rng: &mut R,
    now: DateTime<Utc>,
) -> PerformanceReport {
    let metrics = PerformanceMetrics::sample(rng);

    // Most recent month first.
    let monthly_performance = (0..PERFORMANCE_MONTHS)
        .map(|i| MonthlyPerformance {
            month: month_label(now, i),
            revenue: rng.random_range(40_000..=60_000),
            expenses: rng.random_range(10_000..=20_000),
            net_income: rng.random_range(25_000..=40_000),
            occupancy: rng.random_range(0.85..=0.98),
        })
        .collect();

    let best_performing_property = PropertyHighlight {
        id: rng.random_range(1..=12),
        name: "Sunset Plaza Apartments",
        roi: rng.random_range(8.0..=12.0),
    };
    let worst_performing_property = PropertyHighlight {
        id: rng.random_range(1..=12),
        name: "Riverside Condominiums",
        roi: rng.random_range(4.0..=7.0),
    };

    PerformanceReport {
        user_id: user_id.clone(),
        metrics,
        monthly_performance,
        best_performing_property,
        worst_performing_property,
        calculation_date: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    #[test]
    fn test_metrics_within_ranges() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let m = PerformanceMetrics::sample(&mut rng);
            assert!((5.0..=15.0).contains(&m.ytd_return));
            assert!((-2.0..=5.0).contains(&m.mtd_return));
            assert!((6.0..=12.0).contains(&m.total_roi));
            assert!((5.0..=10.0).contains(&m.cash_on_cash_return));
            assert!((4.0..=8.0).contains(&m.cap_rate));
            assert!((8.0..=15.0).contains(&m.gross_rent_multiplier));
        }
    }

    #[test]
    fn test_monthly_records_most_recent_first() {
        let now = Utc.with_ymd_and_hms(2024, 6, 20, 9, 30, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let report = aggregate_performance(&json!("9"), &mut rng, now);

        assert_eq!(report.monthly_performance.len(), 12);
        assert_eq!(report.monthly_performance[0].month, "2024-06");
        assert_eq!(report.monthly_performance[1].month, "2024-05");

        let months: Vec<&str> = report
            .monthly_performance
            .iter()
            .map(|m| m.month.as_str())
            .collect();
        assert!(months.windows(2).all(|w| w[0] >= w[1]));

        for record in &report.monthly_performance {
            assert!((40_000..=60_000).contains(&record.revenue));
            assert!((10_000..=20_000).contains(&record.expenses));
            assert!((25_000..=40_000).contains(&record.net_income));
            assert!((0.85..=0.98).contains(&record.occupancy));
        }
    }

    #[test]
    fn test_highlights() {
        let mut rng = StdRng::seed_from_u64(5);
        let report = aggregate_performance(&json!("9"), &mut rng, Utc::now());

        assert_eq!(report.user_id, json!("9"));
        assert_eq!(report.best_performing_property.name, "Sunset Plaza Apartments");
        assert_eq!(report.worst_performing_property.name, "Riverside Condominiums");
        assert!((1..=12).contains(&report.best_performing_property.id));
        assert!((8.0..=12.0).contains(&report.best_performing_property.roi));
        assert!((4.0..=7.0).contains(&report.worst_performing_property.roi));
    }
}
