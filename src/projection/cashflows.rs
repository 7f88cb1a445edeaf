//! Period output structures for cash-flow projections

use serde::{Deserialize, Serialize};

use super::ProjectionHorizon;
use crate::currency::round_currency;

/// A single row of projection output for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodResult {
    pub period: u32,

    // Flows for this period
    pub inflow_total: f64,
    pub outflow_total: f64,
    pub net: f64,

    // Running position
    pub running_balance: f64,
    pub cumulative_inflow: f64,
    pub cumulative_outflow: f64,
    pub is_negative: bool,
}

impl PeriodResult {
    /// Build a row from unrounded values, rounding each stored field to cents
    pub fn rounded(
        period: u32,
        inflow_total: f64,
        outflow_total: f64,
        running_balance: f64,
        cumulative_inflow: f64,
        cumulative_outflow: f64,
    ) -> Self {
        let running_balance_rounded = round_currency(running_balance);
        Self {
            period,
            inflow_total: round_currency(inflow_total),
            outflow_total: round_currency(outflow_total),
            net: round_currency(inflow_total - outflow_total),
            running_balance: running_balance_rounded,
            cumulative_inflow: round_currency(cumulative_inflow),
            cumulative_outflow: round_currency(cumulative_outflow),
            is_negative: running_balance_rounded < 0.0,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Horizon the schedule was produced for
    pub horizon: ProjectionHorizon,

    /// Period rows, ascending from period 1
    pub periods: Vec<PeriodResult>,
}

impl ProjectionResult {
    pub fn new(horizon: ProjectionHorizon) -> Self {
        Self {
            horizon,
            periods: Vec::with_capacity(horizon.period_count as usize),
        }
    }

    /// Add a period row
    pub fn add_row(&mut self, row: PeriodResult) {
        self.periods.push(row);
    }

    /// Totals taken from the period-accurate schedule.
    ///
    /// These follow every item's window and recurrence exactly, unlike
    /// [`ProjectionSummary`](super::ProjectionSummary) which uses steady-state
    /// averages.
    pub fn totals(&self) -> ScheduleTotals {
        let opening = self.horizon.opening_balance;
        let last = self.periods.last();

        let (min_balance, max_balance) = self
            .periods
            .iter()
            .map(|r| r.running_balance)
            .fold((opening, opening), |(lo, hi), b| (lo.min(b), hi.max(b)));

        ScheduleTotals {
            total_periods: self.periods.len() as u32,
            total_inflow: last.map(|r| r.cumulative_inflow).unwrap_or(0.0),
            total_outflow: last.map(|r| r.cumulative_outflow).unwrap_or(0.0),
            net_cash_flow: round_currency(
                last.map(|r| r.cumulative_inflow - r.cumulative_outflow).unwrap_or(0.0),
            ),
            ending_balance: last.map(|r| r.running_balance).unwrap_or(round_currency(opening)),
            min_balance: round_currency(min_balance),
            max_balance: round_currency(max_balance),
            first_negative_period: self.periods.iter().find(|r| r.is_negative).map(|r| r.period),
        }
    }
}

/// Headline figures read straight off a computed schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub total_periods: u32,
    pub total_inflow: f64,
    pub total_outflow: f64,
    pub net_cash_flow: f64,
    pub ending_balance: f64,
    /// Includes the opening balance as period 0
    pub min_balance: f64,
    /// Includes the opening balance as period 0
    pub max_balance: f64,
    pub first_negative_period: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_row() {
        let row = PeriodResult::rounded(1, 100.004, 0.1 + 0.2, 99.704, 100.004, 0.3);
        assert_eq!(row.inflow_total, 100.0);
        assert_eq!(row.outflow_total, 0.3);
        assert_eq!(row.net, 99.7);
        assert_eq!(row.running_balance, 99.7);
        assert!(!row.is_negative);
    }

    #[test]
    fn test_empty_result_totals() {
        let result = ProjectionResult::new(ProjectionHorizon::new(0, 250.0));
        let totals = result.totals();

        assert_eq!(totals.total_periods, 0);
        assert_eq!(totals.ending_balance, 250.0);
        assert_eq!(totals.min_balance, 250.0);
        assert_eq!(totals.max_balance, 250.0);
        assert_eq!(totals.first_negative_period, None);
    }

    #[test]
    fn test_totals_from_schedule() {
        let mut result = ProjectionResult::new(ProjectionHorizon::new(3, 100.0));
        result.add_row(PeriodResult::rounded(1, 0.0, 150.0, -50.0, 0.0, 150.0));
        result.add_row(PeriodResult::rounded(2, 400.0, 0.0, 350.0, 400.0, 150.0));
        result.add_row(PeriodResult::rounded(3, 0.0, 100.0, 250.0, 400.0, 250.0));

        let totals = result.totals();
        assert_eq!(totals.total_inflow, 400.0);
        assert_eq!(totals.total_outflow, 250.0);
        assert_eq!(totals.net_cash_flow, 150.0);
        assert_eq!(totals.ending_balance, 250.0);
        assert_eq!(totals.min_balance, -50.0);
        assert_eq!(totals.max_balance, 350.0);
        assert_eq!(totals.first_negative_period, Some(1));
    }

    #[test]
    fn test_json_round_trip() {
        let mut result = ProjectionResult::new(ProjectionHorizon::new(1, -20.5));
        result.add_row(PeriodResult::rounded(1, 10.25, 0.0, -10.25, 10.25, 0.0));

        let json = serde_json::to_string(&result).unwrap();
        let back: ProjectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
