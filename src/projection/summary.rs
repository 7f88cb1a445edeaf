//! Steady-state summary metrics: totals, extrema, burn rate and runway
//!
//! The summary is computed from each item's flat monthly average (see
//! [`summary_average`]) rather than from the period schedule, so it can differ
//! from [`ScheduleTotals`](super::ScheduleTotals) when items recur unevenly or
//! have start/end windows.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::recurrence::summary_average;
use super::ProjectionHorizon;
use crate::currency::round_currency;
use crate::items::{FlowKind, RecurringItem};

/// Periods of operation left at the current burn rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "periods", rename_all = "lowercase")]
pub enum Runway {
    /// Balance is exhausted after this many periods
    Periods(f64),
    /// No burn: the balance never runs out
    Unbounded,
}

impl Runway {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Runway::Unbounded)
    }

    /// Finite runway in periods, None when unbounded
    pub fn periods(&self) -> Option<f64> {
        match self {
            Runway::Periods(periods) => Some(*periods),
            Runway::Unbounded => None,
        }
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runway::Periods(periods) => write!(f, "{:.1} periods", periods),
            Runway::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_inflow: f64,
    pub total_outflow: f64,
    pub net_cash_flow: f64,
    pub ending_balance: f64,
    pub min_balance: f64,
    pub max_balance: f64,
    pub periods_negative: u32,
    pub periods_positive: u32,
    /// Steady-state net flow per period
    pub net_monthly_cash_flow: f64,
    pub burn_rate: f64,
    pub runway: Runway,
}

/// Reduce items and horizon to headline metrics
pub fn summarize(items: &[RecurringItem], horizon: &ProjectionHorizon) -> ProjectionSummary {
    let (monthly_inflow, monthly_outflow) =
        items.iter().fold((0.0, 0.0), |(inflow, outflow), item| {
            let average = summary_average(item);
            match item.kind {
                FlowKind::Inflow => (inflow + average, outflow),
                FlowKind::Outflow => (inflow, outflow + average),
            }
        });
    let net_monthly = monthly_inflow - monthly_outflow;

    let opening = horizon.opening_balance;
    let mut balance = opening;
    let mut min_balance = opening;
    let mut max_balance = opening;
    let mut periods_negative = 0;
    let mut periods_positive = 0;

    for _period in 1..=horizon.period_count {
        balance += net_monthly;
        min_balance = min_balance.min(balance);
        max_balance = max_balance.max(balance);
        // Sign is judged on the stored precision, as in the period schedule
        if round_currency(balance) < 0.0 {
            periods_negative += 1;
        } else {
            periods_positive += 1;
        }
    }

    // Sub-cent noise in the net flow is not a burn
    let burn_rate = round_currency((-net_monthly).max(0.0));
    let runway = if burn_rate > 0.0 {
        Runway::Periods(opening.max(0.0) / burn_rate)
    } else {
        Runway::Unbounded
    };

    let periods = horizon.period_count as f64;
    ProjectionSummary {
        total_inflow: round_currency(monthly_inflow * periods),
        total_outflow: round_currency(monthly_outflow * periods),
        net_cash_flow: round_currency(net_monthly * periods),
        ending_balance: round_currency(balance),
        min_balance: round_currency(min_balance),
        max_balance: round_currency(max_balance),
        periods_negative,
        periods_positive,
        net_monthly_cash_flow: round_currency(net_monthly),
        burn_rate,
        runway,
    }
}
