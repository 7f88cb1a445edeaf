//! Cash-flow projection: recurrence rules, period simulation and summary metrics

mod state;
mod engine;
mod cashflows;
pub mod recurrence;
mod summary;

pub use state::SimulationState;
pub use engine::{simulate, ProjectionEngine, ProjectionHorizon, StandardHorizon};
pub use cashflows::{PeriodResult, ProjectionResult, ScheduleTotals};
pub use recurrence::{amount_for_period, summary_average};
pub use summary::{summarize, ProjectionSummary, Runway};
