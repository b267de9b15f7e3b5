use crate::domain::sampling::days_before;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::Serialize;
use serde_json::Value;

pub const MAINTENANCE_ITEMS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaintenanceType {
    Routine,
    Emergency,
    Preventive,
    Upgrade,
}

impl Distribution<MaintenanceType> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MaintenanceType {
        match rng.random_range(0..4) {
            0 => MaintenanceType::Routine,
            1 => MaintenanceType::Emergency,
            2 => MaintenanceType::Preventive,
            _ => MaintenanceType::Upgrade,
        }
    }
}

/// Trade responsible for the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TradeCategory {
    Plumbing,
    Electrical,
    #[serde(rename = "HVAC")]
    Hvac,
    Roofing,
    Painting,
    Landscaping,
}

impl Distribution<TradeCategory> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TradeCategory {
        match rng.random_range(0..6) {
            0 => TradeCategory::Plumbing,
            1 => TradeCategory::Electrical,
            2 => TradeCategory::Hvac,
            3 => TradeCategory::Roofing,
            4 => TradeCategory::Painting,
            _ => TradeCategory::Landscaping,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaintenanceStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Scheduled,
}

impl Distribution<MaintenanceStatus> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MaintenanceStatus {
        match rng.random_range(0..3) {
            0 => MaintenanceStatus::Completed,
            1 => MaintenanceStatus::InProgress,
            _ => MaintenanceStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceItem {
    pub id: u32,
    pub property_id: u32,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub category: TradeCategory,
    pub cost: i64,
    pub date: DateTime<Utc>,
    pub status: MaintenanceStatus,
    pub vendor: String,
}

/// Item counts per maintenance type. Every type is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaintenanceByType {
    #[serde(rename = "Routine")]
    pub routine: usize,
    #[serde(rename = "Emergency")]
    pub emergency: usize,
    #[serde(rename = "Preventive")]
    pub preventive: usize,
    #[serde(rename = "Upgrade")]
    pub upgrade: usize,
}

impl MaintenanceByType {
    pub fn count(items: &[MaintenanceItem]) -> Self {
        let mut counts = Self::default();
        for item in items {
            match item.kind {
                MaintenanceType::Routine => counts.routine += 1,
                MaintenanceType::Emergency => counts.emergency += 1,
                MaintenanceType::Preventive => counts.preventive += 1,
                MaintenanceType::Upgrade => counts.upgrade += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.routine + self.emergency + self.preventive + self.upgrade
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceReport {
    pub user_id: Value,
    pub maintenance_items: Vec<MaintenanceItem>,
    pub total_maintenance_cost: i64,
    pub average_cost_per_item: f64,
    pub maintenance_by_type: MaintenanceByType,
    pub upcoming_maintenance: u32,
    pub aggregation_date: DateTime<Utc>,
}

pub fn aggregate_maintenance<R: Rng + ?Sized>(
    user_id: &Value,
    rng: &mut R,
    now: DateTime<Utc>,
) -> MaintenanceReport {
    let maintenance_items: Vec<MaintenanceItem> = (1..=MAINTENANCE_ITEMS)
        .map(|id| {
            let date = days_before(now, rng.random_range(1..=365));
            MaintenanceItem {
                id,
                property_id: rng.random_range(1..=12),
                kind: rng.random(),
                category: rng.random(),
                cost: rng.random_range(100..=5_000),
                date,
                status: rng.random(),
                vendor: format!("Vendor {}", rng.random_range(1..=10)),
            }
        })
        .collect();

    let total_maintenance_cost: i64 = maintenance_items.iter().map(|m| m.cost).sum();
    let average_cost_per_item = total_maintenance_cost as f64 / maintenance_items.len() as f64;
    let maintenance_by_type = MaintenanceByType::count(&maintenance_items);

    MaintenanceReport {
        user_id: user_id.clone(),
        maintenance_items,
        total_maintenance_cost,
        average_cost_per_item,
        maintenance_by_type,
        upcoming_maintenance: rng.random_range(2..=8),
        aggregation_date: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    #[test]
    fn test_type_buckets_sum_to_item_count() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = aggregate_maintenance(&json!("1"), &mut rng, Utc::now());

            assert_eq!(report.maintenance_items.len(), 20);
            assert_eq!(report.maintenance_by_type.total(), 20);
        }
    }

    #[test]
    fn test_cost_aggregates() {
        let mut rng = StdRng::seed_from_u64(4);
        let report = aggregate_maintenance(&json!("1"), &mut rng, Utc::now());

        let total: i64 = report.maintenance_items.iter().map(|m| m.cost).sum();
        assert_eq!(report.total_maintenance_cost, total);
        assert!((report.average_cost_per_item - total as f64 / 20.0).abs() < 1e-9);
        assert!((2..=8).contains(&report.upcoming_maintenance));
    }

    #[test]
    fn test_items_backdated_within_a_year() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(12);
        let report = aggregate_maintenance(&json!("1"), &mut rng, now);

        for (idx, item) in report.maintenance_items.iter().enumerate() {
            assert_eq!(item.id as usize, idx + 1);
            assert!(item.date <= now - Duration::days(1));
            assert!(item.date >= now - Duration::days(365));
            assert!((1..=12).contains(&item.property_id));
            assert!((100..=5_000).contains(&item.cost));
            assert!(item.vendor.starts_with("Vendor "));
        }
    }

    #[test]
    fn test_absent_types_are_zero_filled() {
        let counts = MaintenanceByType::count(&[]);
        let wire = serde_json::to_value(counts).unwrap();
        assert_eq!(
            wire,
            json!({"Routine": 0, "Emergency": 0, "Preventive": 0, "Upgrade": 0})
        );
    }

    #[test]
    fn test_labels_serialize_like_the_frontend_expects() {
        assert_eq!(serde_json::to_value(TradeCategory::Hvac).unwrap(), json!("HVAC"));
        assert_eq!(
            serde_json::to_value(MaintenanceStatus::InProgress).unwrap(),
            json!("In Progress")
        );
        assert_eq!(
            serde_json::to_value(MaintenanceType::Preventive).unwrap(),
            json!("Preventive")
        );
    }
}
