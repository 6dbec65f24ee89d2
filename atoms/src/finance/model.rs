use serde::{Deserialize, Serialize};

/// Share of the sale value the team cost should stay under.
pub const TEAM_COST_TARGET_PERCENT: f64 = 40.0;

/// Monthly financials for a project contract, one record per project.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FinanceRecord {
    pub finance_id: String,
    pub project_id: String,
    /// Monthly sale value of the contract.
    pub sale_value: f64,
    /// Contract length in months.
    pub contract_duration: u32,
    pub member_costs: Vec<MemberCost>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MemberCost {
    pub role: String,
    pub name: String,
    pub cost: f64,
}

/// Derived monthly figures for a finance record.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceSummary {
    pub total_costs: f64,
    pub profit: f64,
    /// Profit as a percent of the sale value.
    pub margin: f64,
    /// Team cost as a percent of the sale value.
    pub cost_percentage: f64,
}

impl FinanceRecord {
    /// Starting record for a project that has never been simulated.
    pub fn default_for(project_id: &str) -> Self {
        Self {
            finance_id: String::new(),
            project_id: project_id.to_string(),
            sale_value: 10_000.0,
            contract_duration: 12,
            member_costs: vec![
                MemberCost {
                    role: "Copywriting".to_string(),
                    name: "Ana".to_string(),
                    cost: 1_000.0,
                },
                MemberCost {
                    role: "Design".to_string(),
                    name: "Beto".to_string(),
                    cost: 1_500.0,
                },
                MemberCost {
                    role: "Strategy".to_string(),
                    name: "Carla".to_string(),
                    cost: 1_500.0,
                },
            ],
        }
    }

    pub fn summary(&self) -> FinanceSummary {
        let total_costs: f64 = self.member_costs.iter().map(|m| m.cost).sum();
        let profit = self.sale_value - total_costs;
        let (margin, cost_percentage) = if self.sale_value == 0.0 {
            (0.0, 0.0)
        } else {
            (
                profit / self.sale_value * 100.0,
                total_costs / self.sale_value * 100.0,
            )
        };
        FinanceSummary {
            total_costs,
            profit,
            margin,
            cost_percentage,
        }
    }

    /// Full value of the contract over its duration.
    pub fn contract_value(&self) -> f64 {
        self.sale_value * self.contract_duration as f64
    }

    /// Monthly profit projected over the whole contract.
    pub fn projected_profit(&self) -> f64 {
        self.summary().profit * self.contract_duration as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_summary() {
        let record = FinanceRecord::default_for("p1");
        let summary = record.summary();
        assert_eq!(summary.total_costs, 4_000.0);
        assert_eq!(summary.profit, 6_000.0);
        assert_eq!(summary.margin, 60.0);
        assert_eq!(summary.cost_percentage, 40.0);
    }

    #[test]
    fn contract_projection_scales_with_duration() {
        let record = FinanceRecord::default_for("p1");
        assert_eq!(record.contract_value(), 120_000.0);
        assert_eq!(record.projected_profit(), 72_000.0);
    }

    #[test]
    fn zero_sale_value_yields_zero_percentages() {
        let mut record = FinanceRecord::default_for("p1");
        record.sale_value = 0.0;
        let summary = record.summary();
        assert_eq!(summary.margin, 0.0);
        assert_eq!(summary.cost_percentage, 0.0);
        assert_eq!(summary.profit, -4_000.0);
    }
}
