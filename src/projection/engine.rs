//! Core projection engine for period-by-period cash-flow schedules

use serde::{Deserialize, Serialize};

use super::cashflows::{PeriodResult, ProjectionResult};
use super::recurrence::amount_for_period;
use super::state::SimulationState;
use crate::error::PlannerError;
use crate::items::{FlowKind, RecurringItem};

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionHorizon {
    /// Number of periods (months) to simulate
    pub period_count: u32,

    /// Starting balance, may be negative
    pub opening_balance: f64,
}

impl ProjectionHorizon {
    pub fn new(period_count: u32, opening_balance: f64) -> Self {
        Self {
            period_count,
            opening_balance,
        }
    }

    /// Horizon using one of the lengths offered to users
    pub fn standard(horizon: StandardHorizon, opening_balance: f64) -> Self {
        Self::new(horizon.period_count(), opening_balance)
    }
}

impl Default for ProjectionHorizon {
    fn default() -> Self {
        Self {
            period_count: 12, // 1 year
            opening_balance: 0.0,
        }
    }
}

/// Projection lengths offered to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardHorizon {
    SixMonths,
    OneYear,
    TwoYears,
    ThreeYears,
    FiveYears,
}

impl StandardHorizon {
    pub const ALL: [StandardHorizon; 5] = [
        StandardHorizon::SixMonths,
        StandardHorizon::OneYear,
        StandardHorizon::TwoYears,
        StandardHorizon::ThreeYears,
        StandardHorizon::FiveYears,
    ];

    pub fn period_count(&self) -> u32 {
        match self {
            StandardHorizon::SixMonths => 6,
            StandardHorizon::OneYear => 12,
            StandardHorizon::TwoYears => 24,
            StandardHorizon::ThreeYears => 36,
            StandardHorizon::FiveYears => 60,
        }
    }
}

impl TryFrom<u32> for StandardHorizon {
    type Error = PlannerError;

    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        StandardHorizon::ALL
            .into_iter()
            .find(|h| h.period_count() == periods)
            .ok_or(PlannerError::UnsupportedHorizon(periods))
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    horizon: ProjectionHorizon,
}

impl ProjectionEngine {
    pub fn new(horizon: ProjectionHorizon) -> Self {
        Self { horizon }
    }

    pub fn horizon(&self) -> &ProjectionHorizon {
        &self.horizon
    }

    /// Run the schedule for a set of items
    pub fn project(&self, items: &[RecurringItem]) -> ProjectionResult {
        log::debug!(
            "Projecting {} items over {} periods from opening balance {:.2}",
            items.len(),
            self.horizon.period_count,
            self.horizon.opening_balance
        );

        let mut result = ProjectionResult::new(self.horizon);
        let mut state = SimulationState::from_horizon(&self.horizon);

        for _period in 1..=self.horizon.period_count {
            state.advance_period();
            let row = self.calculate_period(items, &mut state);
            result.add_row(row);
        }

        result
    }

    /// Evaluate every item for the current period and fold the totals into state
    fn calculate_period(&self, items: &[RecurringItem], state: &mut SimulationState) -> PeriodResult {
        let (inflow, outflow) = items.iter().fold((0.0, 0.0), |(inflow, outflow), item| {
            let amount = amount_for_period(item, state.period);
            match item.kind {
                FlowKind::Inflow => (inflow + amount, outflow),
                FlowKind::Outflow => (inflow, outflow + amount),
            }
        });

        state.apply(inflow, outflow);

        PeriodResult::rounded(
            state.period,
            inflow,
            outflow,
            state.running_balance,
            state.cumulative_inflow,
            state.cumulative_outflow,
        )
    }
}

/// Simulate `items` over `horizon`, one row per period
pub fn simulate(items: &[RecurringItem], horizon: &ProjectionHorizon) -> Vec<PeriodResult> {
    ProjectionEngine::new(*horizon).project(items).periods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Frequency;
    use approx::assert_abs_diff_eq;

    fn monthly(id: &str, amount: f64, kind: FlowKind) -> RecurringItem {
        RecurringItem::new(id, amount, kind, Frequency::Monthly)
    }

    #[test]
    fn test_monthly_inflow_scenario() {
        let items = vec![monthly("sales", 1000.0, FlowKind::Inflow)];
        let rows = simulate(&items, &ProjectionHorizon::new(3, 0.0));

        let balances: Vec<f64> = rows.iter().map(|r| r.running_balance).collect();
        assert_eq!(balances, vec![1000.0, 2000.0, 3000.0]);
        assert!(rows.iter().all(|r| !r.is_negative));
        assert_eq!(rows.iter().map(|r| r.period).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(rows[2].cumulative_inflow, 3000.0);
        assert_eq!(rows[2].cumulative_outflow, 0.0);
    }

    #[test]
    fn test_quarterly_outflow_scenario() {
        let items = vec![RecurringItem::new("tax", 300.0, FlowKind::Outflow, Frequency::Quarterly)];
        let rows = simulate(&items, &ProjectionHorizon::new(6, 0.0));

        let outflows: Vec<f64> = rows.iter().map(|r| r.outflow_total).collect();
        assert_eq!(outflows, vec![100.0, 0.0, 0.0, 100.0, 0.0, 0.0]);
        assert_eq!(rows[5].running_balance, -200.0);
        assert!(rows[0].is_negative);
    }

    #[test]
    fn test_empty_items_flat_schedule() {
        let rows = simulate(&[], &ProjectionHorizon::new(4, 1234.56));

        assert_eq!(rows.len(), 4);
        for row in &rows {
            assert_eq!(row.running_balance, 1234.56);
            assert_eq!(row.net, 0.0);
        }
    }

    #[test]
    fn test_zero_horizon_empty() {
        let items = vec![monthly("sales", 1000.0, FlowKind::Inflow)];
        assert!(simulate(&items, &ProjectionHorizon::new(0, 500.0)).is_empty());
    }

    #[test]
    fn test_negative_opening_balance() {
        let items = vec![monthly("sales", 400.0, FlowKind::Inflow)];
        let rows = simulate(&items, &ProjectionHorizon::new(3, -1000.0));

        assert!(rows[0].is_negative);
        assert!(rows[1].is_negative);
        assert_eq!(rows[2].running_balance, 200.0);
        assert!(!rows[2].is_negative);
    }

    #[test]
    fn test_mixed_items_and_windows() {
        let items = vec![
            monthly("sales", 5000.0, FlowKind::Inflow),
            monthly("rent", 2000.0, FlowKind::Outflow).ending_at(1),
            RecurringItem::new("grant", 3000.0, FlowKind::Inflow, Frequency::OneTime).starting_at(2),
        ];
        let rows = simulate(&items, &ProjectionHorizon::new(4, 0.0));

        let nets: Vec<f64> = rows.iter().map(|r| r.net).collect();
        assert_eq!(nets, vec![3000.0, 3000.0, 8000.0, 5000.0]);
        assert_eq!(rows[3].running_balance, 19000.0);
        assert_eq!(rows[3].cumulative_inflow, 23000.0);
        assert_eq!(rows[3].cumulative_outflow, 4000.0);
    }

    #[test]
    fn test_rounding_does_not_compound() {
        // 1/3 of a cent each month: rounded rows stay tied to the true running total
        let items = vec![RecurringItem::new("fee", 0.01, FlowKind::Inflow, Frequency::Quarterly)];
        let rows = simulate(&items, &ProjectionHorizon::new(60, 0.0));

        let true_total = 20.0 * 0.01 / 3.0;
        assert_abs_diff_eq!(rows[59].running_balance, true_total, epsilon = 0.005);
    }

    #[test]
    fn test_idempotent() {
        let items = vec![
            monthly("sales", 1234.567, FlowKind::Inflow),
            RecurringItem::new("tax", 999.99, FlowKind::Outflow, Frequency::Quarterly),
            RecurringItem::new("insurance", 1800.0, FlowKind::Outflow, Frequency::Annually),
        ];
        let horizon = ProjectionHorizon::new(36, -250.0);

        let first = simulate(&items, &horizon);
        let second = simulate(&items, &horizon);
        assert_eq!(first, second);
    }

    #[test]
    fn test_standard_horizon_conversion() {
        assert_eq!(StandardHorizon::try_from(24).unwrap(), StandardHorizon::TwoYears);
        assert!(matches!(
            StandardHorizon::try_from(18),
            Err(PlannerError::UnsupportedHorizon(18))
        ));
        let horizon = ProjectionHorizon::standard(StandardHorizon::FiveYears, 100.0);
        assert_eq!(horizon.period_count, 60);
    }

    #[test]
    fn test_default_horizon() {
        let horizon = ProjectionHorizon::default();
        assert_eq!(horizon.period_count, 12);
        assert_eq!(horizon.opening_balance, 0.0);
    }
}
