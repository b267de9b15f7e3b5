use crate::domain::sampling::month_label;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

pub const CASHFLOW_MONTHS: usize = 6;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CashflowIncome {
    pub rental: i64,
    pub other: i64,
}

impl CashflowIncome {
    pub fn total(&self) -> i64 {
        self.rental + self.other
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CashflowExpenses {
    pub mortgage: i64,
    pub maintenance: i64,
    pub property_tax: i64,
    pub insurance: i64,
    pub utilities: i64,
    pub management: i64,
}

impl CashflowExpenses {
    pub fn total(&self) -> i64 {
        self.mortgage
            + self.maintenance
            + self.property_tax
            + self.insurance
            + self.utilities
            + self.management
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CashflowMonth {
    pub month: String,
    pub income: CashflowIncome,
    pub expenses: CashflowExpenses,
    pub net_cashflow: i64,
    /// `net_cashflow × (month_index + 1)`; a scaled projection of this month,
    /// not a running total across months.
    pub cumulative_cashflow: i64,
}

impl CashflowMonth {
    pub fn new(
        month: String,
        month_index: usize,
        income: CashflowIncome,
        expenses: CashflowExpenses,
    ) -> Self {
        let net_cashflow = income.total() - expenses.total();
        Self {
            month,
            income,
            expenses,
            net_cashflow,
            cumulative_cashflow: net_cashflow * (month_index as i64 + 1),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CashflowReport {
    pub user_id: Value,
    pub cashflow_summary: Vec<CashflowMonth>,
    pub total_income_ytd: i64,
    pub total_expenses_ytd: i64,
    pub net_cashflow_ytd: i64,
    pub average_monthly_cashflow: f64,
    pub aggregation_date: DateTime<Utc>,
}

impl CashflowReport {
    pub fn from_months(user_id: Value, months: Vec<CashflowMonth>, now: DateTime<Utc>) -> Self {
        let total_income_ytd = months.iter().map(|m| m.income.total()).sum();
        let total_expenses_ytd = months.iter().map(|m| m.expenses.total()).sum();
        let net_cashflow_ytd: i64 = months.iter().map(|m| m.net_cashflow).sum();
        let average_monthly_cashflow = if months.is_empty() {
            0.0
        } else {
            net_cashflow_ytd as f64 / months.len() as f64
        };

        Self {
            user_id,
            cashflow_summary: months,
            total_income_ytd,
            total_expenses_ytd,
            net_cashflow_ytd,
            average_monthly_cashflow,
            aggregation_date: now,
        }
    }
}

pub fn aggregate_cashflow<R: Rng + ?Sized>(
    user_id: &Value,
    rng: &mut R,
    now: DateTime<Utc>,
) -> CashflowReport {
    let months = (0..CASHFLOW_MONTHS)
        .map(|idx| {
            let rental = rng.random_range(40_000..=55_000);
            let expenses = CashflowExpenses {
                mortgage: rng.random_range(20_000..=25_000),
                maintenance: rng.random_range(2_000..=5_000),
                property_tax: rng.random_range(3_000..=5_000),
                insurance: rng.random_range(1_500..=2_500),
                utilities: rng.random_range(1_000..=2_000),
                management: rng.random_range(3_000..=4_000),
            };
            let income = CashflowIncome {
                rental,
                other: rng.random_range(0..=2_000),
            };
            CashflowMonth::new(month_label(now, idx), idx, income, expenses)
        })
        .collect();

    CashflowReport::from_months(user_id.clone(), months, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    #[test]
    fn test_monthly_net_is_income_minus_all_expenses() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = aggregate_cashflow(&json!("1"), &mut rng, Utc::now());

            assert_eq!(report.cashflow_summary.len(), 6);
            for month in &report.cashflow_summary {
                let e = &month.expenses;
                let expenses = e.mortgage
                    + e.maintenance
                    + e.property_tax
                    + e.insurance
                    + e.utilities
                    + e.management;
                assert_eq!(
                    month.net_cashflow,
                    month.income.rental + month.income.other - expenses
                );
            }
        }
    }

    #[test]
    fn test_ytd_totals_are_true_sums() {
        let mut rng = StdRng::seed_from_u64(21);
        let report = aggregate_cashflow(&json!("1"), &mut rng, Utc::now());

        let nets: i64 = report.cashflow_summary.iter().map(|m| m.net_cashflow).sum();
        assert_eq!(report.net_cashflow_ytd, nets);
        assert_eq!(
            report.net_cashflow_ytd,
            report.total_income_ytd - report.total_expenses_ytd
        );
        assert!((report.average_monthly_cashflow - nets as f64 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_scales_by_month_index() {
        let mut rng = StdRng::seed_from_u64(8);
        let report = aggregate_cashflow(&json!("1"), &mut rng, Utc::now());

        for (idx, month) in report.cashflow_summary.iter().enumerate() {
            assert_eq!(month.cumulative_cashflow, month.net_cashflow * (idx as i64 + 1));
        }
    }

    #[test]
    fn test_line_items_within_ranges() {
        let mut rng = StdRng::seed_from_u64(99);
        let report = aggregate_cashflow(&json!("1"), &mut rng, Utc::now());

        for month in &report.cashflow_summary {
            assert!((40_000..=55_000).contains(&month.income.rental));
            assert!((0..=2_000).contains(&month.income.other));
            assert!((20_000..=25_000).contains(&month.expenses.mortgage));
            assert!((1_500..=2_500).contains(&month.expenses.insurance));
            assert!((3_000..=4_000).contains(&month.expenses.management));
        }
    }
}
