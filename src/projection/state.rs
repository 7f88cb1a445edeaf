//! Running state carried from one simulated period to the next

use super::ProjectionHorizon;

/// Unrounded accumulators for a cash-flow simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current period (1-indexed, 0 before the first advance)
    pub period: u32,

    /// Opening balance plus cumulative net through `period`
    pub running_balance: f64,

    /// Inflows summed since period 1
    pub cumulative_inflow: f64,

    /// Outflows summed since period 1
    pub cumulative_outflow: f64,
}

impl SimulationState {
    /// Initialize state at the start of a horizon
    pub fn from_horizon(horizon: &ProjectionHorizon) -> Self {
        Self {
            period: 0,
            running_balance: horizon.opening_balance,
            cumulative_inflow: 0.0,
            cumulative_outflow: 0.0,
        }
    }

    /// Advance to next period
    pub fn advance_period(&mut self) {
        self.period += 1;
    }

    /// Fold one period's totals into the accumulators
    pub fn apply(&mut self, inflow: f64, outflow: f64) {
        self.cumulative_inflow += inflow;
        self.cumulative_outflow += outflow;
        self.running_balance += inflow - outflow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_accumulates() {
        let horizon = ProjectionHorizon::new(3, -500.0);
        let mut state = SimulationState::from_horizon(&horizon);

        state.advance_period();
        state.apply(1000.0, 200.0);
        state.advance_period();
        state.apply(0.0, 300.0);

        assert_eq!(state.period, 2);
        assert_eq!(state.running_balance, 0.0);
        assert_eq!(state.cumulative_inflow, 1000.0);
        assert_eq!(state.cumulative_outflow, 500.0);
    }
}
