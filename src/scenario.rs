//! Scenario runner for comparing horizons over one item set
//!
//! Holds the caller's items and evaluates them over several horizons or
//! opening balances. Each run is independent and pure, so batches fan out
//! across the rayon thread pool.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::items::RecurringItem;
use crate::projection::{
    summarize, ProjectionEngine, ProjectionHorizon, ProjectionResult, ProjectionSummary, StandardHorizon,
};

/// Schedule and summary for one horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub result: ProjectionResult,
    pub summary: ProjectionSummary,
}

/// Runs projections for a fixed item set
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(items);
/// for outcome in runner.run_standard_horizons(10_000.0) {
///     println!("{} periods: runway {}", outcome.result.horizon.period_count, outcome.summary.runway);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    items: Vec<RecurringItem>,
}

impl ScenarioRunner {
    pub fn new(items: Vec<RecurringItem>) -> Self {
        Self { items }
    }

    /// Run a single horizon
    pub fn run(&self, horizon: ProjectionHorizon) -> ScenarioOutcome {
        ScenarioOutcome {
            result: ProjectionEngine::new(horizon).project(&self.items),
            summary: summarize(&self.items, &horizon),
        }
    }

    /// Run several horizons in parallel; output order matches input order
    pub fn run_horizons(&self, horizons: &[ProjectionHorizon]) -> Vec<ScenarioOutcome> {
        horizons.par_iter().map(|horizon| self.run(*horizon)).collect()
    }

    /// Run every standard horizon (6/12/24/36/60) from the same opening balance
    pub fn run_standard_horizons(&self, opening_balance: f64) -> Vec<ScenarioOutcome> {
        let horizons: Vec<ProjectionHorizon> = StandardHorizon::ALL
            .iter()
            .map(|h| ProjectionHorizon::standard(*h, opening_balance))
            .collect();
        self.run_horizons(&horizons)
    }

    pub fn items(&self) -> &[RecurringItem] {
        &self.items
    }

    /// Mutable access for editing the item set between runs
    pub fn items_mut(&mut self) -> &mut Vec<RecurringItem> {
        &mut self.items
    }
}
