use serde::{Deserialize, Serialize};

/// CPA as a share of the ticket price, per scenario.
pub const CPA_FACTOR_CONSERVATIVE: f64 = 0.40;
pub const CPA_FACTOR_EXPECTED: f64 = 0.25;
pub const CPA_FACTOR_SCALE: f64 = 0.15;

/// Healthy agency margin keeps acquisition under 20% of the ticket.
pub const CPA_GOAL_FACTOR: f64 = 0.20;

/// Paid-traffic inputs for a project, one record per project. `month` is a
/// display label for the period the numbers refer to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrafficRecord {
    pub project_id: String,
    pub month: String,
    /// Monthly ad spend.
    pub investment: f64,
    /// Average product ticket.
    pub ticket_price: f64,
}

impl TrafficRecord {
    /// Starting inputs for a project that has never been simulated.
    pub fn default_for(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            month: String::new(),
            investment: 5_000.0,
            ticket_price: 1_500.0,
        }
    }

    pub fn forecast(&self) -> TrafficForecast {
        TrafficForecast {
            conservative: scenario(self.investment, self.ticket_price, CPA_FACTOR_CONSERVATIVE),
            expected: scenario(self.investment, self.ticket_price, CPA_FACTOR_EXPECTED),
            scale: scenario(self.investment, self.ticket_price, CPA_FACTOR_SCALE),
        }
    }

    /// Ideal cost per acquisition for the current ticket.
    pub fn cpa_goal(&self) -> f64 {
        self.ticket_price * CPA_GOAL_FACTOR
    }
}

/// One projected outcome for a given CPA assumption.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub sales: u64,
    pub revenue: f64,
    pub cpa: f64,
    pub roi: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrafficForecast {
    pub conservative: Scenario,
    pub expected: Scenario,
    pub scale: Scenario,
}

/// Project sales volume assuming acquisition costs a fixed share of the
/// ticket price.
pub fn scenario(investment: f64, ticket_price: f64, cpa_factor: f64) -> Scenario {
    if investment <= 0.0 || ticket_price <= 0.0 {
        return Scenario {
            sales: 0,
            revenue: 0.0,
            cpa: 0.0,
            roi: 0.0,
        };
    }
    let sales = (investment / (ticket_price * cpa_factor)).floor() as u64;
    let revenue = sales as f64 * ticket_price;
    let cpa = investment / sales.max(1) as f64;
    let roi = (revenue - investment) / investment;
    Scenario {
        sales,
        revenue,
        cpa,
        roi,
    }
}
